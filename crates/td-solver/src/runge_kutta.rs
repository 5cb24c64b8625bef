//! Explicit 4th-order Runge-Kutta on the first-order form `(ẋ, v̇) = (v, M⁻¹(F − C·v − K·x))`.
//!
//! The force is not sub-sampled: all four stages of step `i` use `F[i]`.

use nalgebra::{DMatrix, DVector};

use crate::damping::NonlinearDamping;
use crate::error::SolverResult;
use crate::integrator::{
    Factored, InitialConditions, MotionEquation, ResponseHistory, TimeIntegrator, residual_force,
    start,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4;

#[derive(Debug, Clone)]
struct PhaseState {
    x: DVector<f64>,
    v: DVector<f64>,
}

impl PhaseState {
    /// `self + scale·rate`
    fn advanced(&self, rate: &PhaseState, scale: f64) -> PhaseState {
        PhaseState {
            x: &self.x + &rate.x * scale,
            v: &self.v + &rate.v * scale,
        }
    }
}

/// Right-hand side with the force held at one grid step.
struct HeldForce<'a> {
    equation: &'a MotionEquation<'a>,
    damping: &'a DMatrix<f64>,
    mass: &'a Factored,
    step: usize,
}

impl HeldForce<'_> {
    fn rhs(&self, state: &PhaseState) -> SolverResult<PhaseState> {
        let f = residual_force(self.equation, self.damping, self.step, &state.x, &state.v);
        Ok(PhaseState {
            x: state.v.clone(),
            v: self.mass.solve(&f)?,
        })
    }

    fn step(&self, state: &PhaseState, dt: f64) -> SolverResult<PhaseState> {
        let k1 = self.rhs(state)?;
        let k2 = self.rhs(&state.advanced(&k1, 0.5 * dt))?;
        let k3 = self.rhs(&state.advanced(&k2, 0.5 * dt))?;
        let k4 = self.rhs(&state.advanced(&k3, dt))?;

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let sum = k1.advanced(&k2, 2.0).advanced(&k3, 2.0).advanced(&k4, 1.0);
        Ok(state.advanced(&sum, dt / 6.0))
    }
}

impl TimeIntegrator for RungeKutta4 {
    fn name(&self) -> &'static str {
        "Runge-Kutta Method"
    }

    fn integrate(
        &self,
        equation: &MotionEquation<'_>,
        initial: &InitialConditions,
        mut damper: Option<&mut NonlinearDamping>,
    ) -> SolverResult<ResponseHistory> {
        let steps = equation.step_count();
        let mut damping = equation.damping.clone();
        let (mut history, mass) = start(equation, initial, &damping)?;

        for i in 0..steps - 1 {
            if let Some(nl) = damper.as_deref_mut() {
                let velocity = history.velocity[(nl.sampled_dof(), i)];
                nl.update(i, velocity, &mut damping);
            }

            let state = PhaseState {
                x: history.displacement.column(i).into_owned(),
                v: history.velocity.column(i).into_owned(),
            };
            let model = HeldForce {
                equation,
                damping: &damping,
                mass: &mass,
                step: i,
            };
            let next = model.step(&state, equation.dt)?;
            let a_next = mass.solve(&residual_force(equation, &damping, i + 1, &next.x, &next.v))?;

            history.displacement.set_column(i + 1, &next.x);
            history.velocity.set_column(i + 1, &next.v);
            history.acceleration.set_column(i + 1, &a_next);
        }

        if let Some(nl) = damper {
            let last = steps - 1;
            nl.record(last, history.velocity[(nl.sampled_dof(), last)].abs());
        }
        Ok(history)
    }
}
