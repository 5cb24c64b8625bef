//! Newmark-β scheme in incremental form.

use nalgebra::DMatrix;

use crate::damping::NonlinearDamping;
use crate::error::SolverResult;
use crate::integrator::{
    Factored, InitialConditions, MotionEquation, ResponseHistory, TimeIntegrator, start,
};
use crate::method::NewmarkParameters;

#[derive(Debug, Clone, Copy)]
pub struct Newmark {
    params: NewmarkParameters,
    name: &'static str,
}

impl Newmark {
    pub fn average_acceleration() -> Self {
        Self {
            params: NewmarkParameters::average_acceleration(),
            name: "Average Acceleration Method",
        }
    }

    pub fn linear_acceleration() -> Self {
        Self {
            params: NewmarkParameters::linear_acceleration(),
            name: "Linear Acceleration Method",
        }
    }
}

/// Matrices that only change with the damping matrix.
struct StepTerms {
    k_eff: Factored,
    /// Multiplies `v[i]` in the effective load increment.
    a1: DMatrix<f64>,
    /// Multiplies `a[i]` in the effective load increment.
    a2: DMatrix<f64>,
}

impl StepTerms {
    fn new(
        equation: &MotionEquation<'_>,
        damping: &DMatrix<f64>,
        params: NewmarkParameters,
    ) -> SolverResult<Self> {
        let NewmarkParameters { gamma, beta } = params;
        let dt = equation.dt;
        let k_eff = equation.stiffness
            + damping * (gamma / (beta * dt))
            + equation.mass * (1.0 / (beta * dt * dt));
        Ok(Self {
            k_eff: Factored::new(k_eff, "effective stiffness")?,
            a1: equation.mass * (1.0 / (beta * dt)) + damping * (gamma / beta),
            a2: equation.mass * (1.0 / (2.0 * beta))
                + damping * (dt * (gamma / (2.0 * beta) - 1.0)),
        })
    }
}

impl TimeIntegrator for Newmark {
    fn name(&self) -> &'static str {
        self.name
    }

    fn integrate(
        &self,
        equation: &MotionEquation<'_>,
        initial: &InitialConditions,
        mut damper: Option<&mut NonlinearDamping>,
    ) -> SolverResult<ResponseHistory> {
        let NewmarkParameters { gamma, beta } = self.params;
        let dt = equation.dt;
        let steps = equation.step_count();
        let mut damping = equation.damping.clone();
        let (mut history, _) = start(equation, initial, &damping)?;
        let mut terms = StepTerms::new(equation, &damping, self.params)?;

        for i in 0..steps - 1 {
            if let Some(nl) = damper.as_deref_mut() {
                let velocity = history.velocity[(nl.sampled_dof(), i)];
                nl.update(i, velocity, &mut damping);
                terms = StepTerms::new(equation, &damping, self.params)?;
            }

            let x = history.displacement.column(i).into_owned();
            let v = history.velocity.column(i).into_owned();
            let a = history.acceleration.column(i).into_owned();

            let dp = equation.force.column(i + 1) - equation.force.column(i)
                + &terms.a1 * &v
                + &terms.a2 * &a;
            let dx = terms.k_eff.solve(&dp)?;
            let dv = &dx * (gamma / (beta * dt)) - &v * (gamma / beta)
                + &a * (dt * (1.0 - gamma / (2.0 * beta)));
            let da = &dx / (beta * dt * dt) - &v / (beta * dt) - &a / (2.0 * beta);

            history.displacement.set_column(i + 1, &(x + dx));
            history.velocity.set_column(i + 1, &(v + dv));
            history.acceleration.set_column(i + 1, &(a + da));
        }

        if let Some(nl) = damper {
            let last = steps - 1;
            nl.record(last, history.velocity[(nl.sampled_dof(), last)].abs());
        }
        Ok(history)
    }
}
