//! Shared time-integration setup and the integrator trait.

use nalgebra::{DMatrix, DVector, Dyn, LU};

use crate::assembly::SystemMatrices;
use crate::damping::NonlinearDamping;
use crate::error::{SolverError, SolverResult};

/// Borrowed equation of motion `M·ẍ + C·ẋ + K·x = F(t)` on a fixed grid.
#[derive(Debug, Clone, Copy)]
pub struct MotionEquation<'a> {
    pub mass: &'a DMatrix<f64>,
    /// Damping at the start of the run; nonlinear runs work on a copy.
    pub damping: &'a DMatrix<f64>,
    pub stiffness: &'a DMatrix<f64>,
    /// One column per grid step.
    pub force: &'a DMatrix<f64>,
    pub dt: f64,
}

impl<'a> MotionEquation<'a> {
    pub fn from_system(system: &'a SystemMatrices) -> Self {
        Self {
            mass: &system.mass,
            damping: &system.damping,
            stiffness: &system.stiffness,
            force: &system.force,
            dt: system.grid.dt(),
        }
    }

    pub fn dof_count(&self) -> usize {
        self.mass.nrows()
    }

    pub fn step_count(&self) -> usize {
        self.force.ncols()
    }

    fn validate(&self, initial: &InitialConditions) -> SolverResult<()> {
        let n = self.dof_count();
        if n == 0 {
            return Err(SolverError::InvalidArg {
                what: "system has no degrees of freedom",
            });
        }
        let square = |m: &DMatrix<f64>| m.shape() == (n, n);
        if !square(self.mass) || !square(self.damping) || !square(self.stiffness) {
            return Err(SolverError::InvalidArg {
                what: "mass, damping and stiffness must be square and of equal size",
            });
        }
        if self.force.nrows() != n || self.force.ncols() == 0 {
            return Err(SolverError::InvalidArg {
                what: "force history must have one row per DOF and at least one step",
            });
        }
        if initial.displacement.len() != n || initial.velocity.len() != n {
            return Err(SolverError::InvalidArg {
                what: "initial conditions must have one entry per DOF",
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SolverError::InvalidArg {
                what: "time step must be positive",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    pub displacement: DVector<f64>,
    pub velocity: DVector<f64>,
}

impl InitialConditions {
    /// Same displacement and velocity on every DOF.
    pub fn uniform(dofs: usize, displacement: f64, velocity: f64) -> Self {
        Self {
            displacement: DVector::from_element(dofs, displacement),
            velocity: DVector::from_element(dofs, velocity),
        }
    }

    pub fn at_rest(dofs: usize) -> Self {
        Self::uniform(dofs, 0.0, 0.0)
    }
}

/// Displacement, velocity and acceleration histories, `n × steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHistory {
    pub displacement: DMatrix<f64>,
    pub velocity: DMatrix<f64>,
    pub acceleration: DMatrix<f64>,
}

/// A fixed-step scheme advancing the whole history in one call.
pub trait TimeIntegrator {
    fn name(&self) -> &'static str;

    /// Integrate over every grid step of `equation.force`.
    ///
    /// With `damper` set, the damper diagonal of the damping matrix is
    /// updated from the liquid velocity as the run progresses.
    fn integrate(
        &self,
        equation: &MotionEquation<'_>,
        initial: &InitialConditions,
        damper: Option<&mut NonlinearDamping>,
    ) -> SolverResult<ResponseHistory>;
}

/// LU factorization of a system matrix that reports singularity by name.
pub(crate) struct Factored {
    lu: LU<f64, Dyn, Dyn>,
    what: &'static str,
}

impl Factored {
    pub(crate) fn new(matrix: DMatrix<f64>, what: &'static str) -> SolverResult<Self> {
        if !matrix.is_square() {
            return Err(SolverError::InvalidArg {
                what: "cannot factor a non-square matrix",
            });
        }
        let lu = matrix.lu();
        if !lu.is_invertible() {
            return Err(SolverError::Singular { what });
        }
        Ok(Self { lu, what })
    }

    pub(crate) fn solve(&self, rhs: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let x = self
            .lu
            .solve(rhs)
            .ok_or(SolverError::Singular { what: self.what })?;
        if x.iter().all(|v| v.is_finite()) {
            Ok(x)
        } else {
            Err(SolverError::Singular { what: self.what })
        }
    }
}

/// Pre-size the histories, place the initial state in column 0 and solve
/// `M·a₀ = F₀ − C·v₀ − K·x₀`. Returns the factored mass for reuse.
pub(crate) fn start(
    equation: &MotionEquation<'_>,
    initial: &InitialConditions,
    damping: &DMatrix<f64>,
) -> SolverResult<(ResponseHistory, Factored)> {
    equation.validate(initial)?;
    let mass = Factored::new(equation.mass.clone(), "mass matrix")?;
    let (n, steps) = (equation.dof_count(), equation.step_count());
    let mut history = ResponseHistory {
        displacement: DMatrix::zeros(n, steps),
        velocity: DMatrix::zeros(n, steps),
        acceleration: DMatrix::zeros(n, steps),
    };
    history.displacement.set_column(0, &initial.displacement);
    history.velocity.set_column(0, &initial.velocity);

    let a0 = mass.solve(&residual_force(
        equation,
        damping,
        0,
        &initial.displacement,
        &initial.velocity,
    ))?;
    history.acceleration.set_column(0, &a0);
    Ok((history, mass))
}

/// `F[step] − C·v − K·x`.
pub(crate) fn residual_force(
    equation: &MotionEquation<'_>,
    damping: &DMatrix<f64>,
    step: usize,
    x: &DVector<f64>,
    v: &DVector<f64>,
) -> DVector<f64> {
    equation.force.column(step) - damping * v - equation.stiffness * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_solves_initial_acceleration() {
        let mass = DMatrix::from_diagonal_element(2, 2, 2.0);
        let damping = DMatrix::from_diagonal_element(2, 2, 1.0);
        let stiffness = DMatrix::from_row_slice(2, 2, &[4.0, -2.0, -2.0, 2.0]);
        let force = DMatrix::from_row_slice(2, 3, &[10.0, 0.0, 0.0, 6.0, 0.0, 0.0]);
        let eq = MotionEquation {
            mass: &mass,
            damping: &damping,
            stiffness: &stiffness,
            force: &force,
            dt: 0.1,
        };
        let initial = InitialConditions::uniform(2, 1.0, 2.0);
        let (h, _) = start(&eq, &initial, &damping).unwrap();
        assert_eq!(h.displacement.shape(), (2, 3));
        assert_eq!(h.displacement.column(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 1.0]);
        // a0 = (F - C v - K x) / 2 = ([10, 6] - [2, 2] - [2, 0]) / 2
        assert!((h.acceleration[(0, 0)] - 3.0).abs() < 1e-12);
        assert!((h.acceleration[(1, 0)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn singular_mass_is_reported() {
        let err = Factored::new(DMatrix::zeros(2, 2), "mass matrix").err().unwrap();
        assert_eq!(err, SolverError::Singular { what: "mass matrix" });
    }

    #[test]
    fn mismatched_initial_conditions_are_rejected() {
        let mass = DMatrix::identity(2, 2);
        let force = DMatrix::zeros(2, 2);
        let eq = MotionEquation {
            mass: &mass,
            damping: &mass,
            stiffness: &mass,
            force: &force,
            dt: 0.1,
        };
        let initial = InitialConditions::at_rest(3);
        assert!(start(&eq, &initial, &mass).is_err());
    }
}
