//! Explicit central finite differences.
//!
//! ```text
//! α = M/Δt² − C/(2Δt)     β = K − 2M/Δt²     γ = M/Δt² + C/(2Δt)
//! x[i+1] = γ⁻¹·(F[i] − β·x[i] − α·x[i−1])
//! ```
//!
//! The recurrence is seeded with `x₋₁ = x₀ − v₀Δt + a₀Δt²/2`. Velocity and
//! acceleration are recovered afterwards by central differences, using one
//! extra step past the end of the grid.

use nalgebra::{DMatrix, DVector};

use crate::damping::NonlinearDamping;
use crate::error::SolverResult;
use crate::integrator::{
    Factored, InitialConditions, MotionEquation, ResponseHistory, TimeIntegrator, start,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CentralDifference;

struct Coefficients {
    alpha: DMatrix<f64>,
    beta: DMatrix<f64>,
    gamma: Factored,
}

impl Coefficients {
    fn new(equation: &MotionEquation<'_>, damping: &DMatrix<f64>) -> SolverResult<Self> {
        let dt = equation.dt;
        let m_dt2 = equation.mass / (dt * dt);
        let c_2dt = damping / (2.0 * dt);
        Ok(Self {
            alpha: &m_dt2 - &c_2dt,
            beta: equation.stiffness - &m_dt2 * 2.0,
            gamma: Factored::new(&m_dt2 + &c_2dt, "central difference γ matrix")?,
        })
    }
}

impl TimeIntegrator for CentralDifference {
    fn name(&self) -> &'static str {
        "Finite Differences Method"
    }

    fn integrate(
        &self,
        equation: &MotionEquation<'_>,
        initial: &InitialConditions,
        mut damper: Option<&mut NonlinearDamping>,
    ) -> SolverResult<ResponseHistory> {
        let dt = equation.dt;
        let steps = equation.step_count();
        let mut damping = equation.damping.clone();
        let (mut history, _) = start(equation, initial, &damping)?;

        // Velocity is estimated from x[i] and x[i-2], so the first two steps
        // share the update made from the initial velocity.
        if let Some(nl) = damper.as_deref_mut() {
            let v0 = initial.velocity[nl.sampled_dof()];
            nl.update(0, v0, &mut damping);
            nl.record(1, v0.abs());
        }
        let mut coeffs = Coefficients::new(equation, &damping)?;

        let x_before: DVector<f64> = &initial.displacement - &initial.velocity * dt
            + history.acceleration.column(0) * (dt * dt / 2.0);
        let mut x_after = initial.displacement.clone();

        for i in 0..steps {
            if i >= 2 {
                if let Some(nl) = damper.as_deref_mut() {
                    let d = nl.sampled_dof();
                    let x = &history.displacement;
                    let velocity = (x[(d, i)] - x[(d, i - 2)]) / (2.0 * dt);
                    nl.update(i, velocity, &mut damping);
                    coeffs = Coefficients::new(equation, &damping)?;
                }
            }

            let x_i = history.displacement.column(i).into_owned();
            let x_prev = if i == 0 {
                x_before.clone()
            } else {
                history.displacement.column(i - 1).into_owned()
            };
            let rhs = equation.force.column(i) - &coeffs.beta * &x_i - &coeffs.alpha * &x_prev;
            let x_next = coeffs.gamma.solve(&rhs)?;
            if i + 1 < steps {
                history.displacement.set_column(i + 1, &x_next);
            } else {
                x_after = x_next;
            }
        }

        for i in 0..steps {
            let x_i = history.displacement.column(i).into_owned();
            let x_prev = if i == 0 {
                x_before.clone()
            } else {
                history.displacement.column(i - 1).into_owned()
            };
            let x_next = if i + 1 < steps {
                history.displacement.column(i + 1).into_owned()
            } else {
                x_after.clone()
            };
            let v = (&x_next - &x_prev) / (2.0 * dt);
            let a = (&x_next - &x_i * 2.0 + &x_prev) / (dt * dt);
            history.velocity.set_column(i, &v);
            history.acceleration.set_column(i, &a);
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_vibration_of_undamped_oscillator() {
        // m = 1, k = 4: x(t) = cos(2t)
        let mass = DMatrix::from_element(1, 1, 1.0);
        let damping = DMatrix::zeros(1, 1);
        let stiffness = DMatrix::from_element(1, 1, 4.0);
        let force = DMatrix::zeros(1, 1001);
        let eq = MotionEquation {
            mass: &mass,
            damping: &damping,
            stiffness: &stiffness,
            force: &force,
            dt: 1e-3,
        };
        let h = CentralDifference
            .integrate(&eq, &InitialConditions::uniform(1, 1.0, 0.0), None)
            .unwrap();
        for i in (0..1001).step_by(100) {
            let t = i as f64 * 1e-3;
            assert!((h.displacement[(0, i)] - (2.0 * t).cos()).abs() < 1e-5);
            assert!((h.velocity[(0, i)] + 2.0 * (2.0 * t).sin()).abs() < 1e-4);
        }
        assert_eq!(h.displacement[(0, 0)], 1.0);
    }

    #[test]
    fn single_step_grid_is_supported() {
        let mass = DMatrix::from_element(1, 1, 1.0);
        let zero = DMatrix::zeros(1, 1);
        let force = DMatrix::from_element(1, 1, 2.0);
        let eq = MotionEquation {
            mass: &mass,
            damping: &zero,
            stiffness: &zero,
            force: &force,
            dt: 0.1,
        };
        let h = CentralDifference
            .integrate(&eq, &InitialConditions::at_rest(1), None)
            .unwrap();
        assert_eq!(h.displacement.ncols(), 1);
        assert!((h.acceleration[(0, 0)] - 2.0).abs() < 1e-9);
    }
}
