//! Velocity-dependent damping of the damper columns.

use nalgebra::DMatrix;

use crate::building::DofLayout;
use td_structure::Tlcd;

/// Per-run state of the nonlinear damper update.
///
/// Owned by a single integration run. It rewrites the damper diagonal of the
/// damping matrix and keeps the liquid speed used at every step.
#[derive(Debug, Clone)]
pub struct NonlinearDamping {
    tlcd: Tlcd,
    layout: DofLayout,
    velocity: Vec<f64>,
}

impl NonlinearDamping {
    pub fn new(tlcd: Tlcd, layout: DofLayout, steps: usize) -> Self {
        Self {
            tlcd,
            layout,
            velocity: vec![0.0; steps],
        }
    }

    /// DOF whose velocity drives the update (the last damper column).
    pub fn sampled_dof(&self) -> usize {
        self.layout.dof_count() - 1
    }

    /// Damping coefficient of one column at liquid speed `velocity`.
    pub fn coefficient(&self, velocity: f64) -> f64 {
        self.tlcd.damping_coefficient_constant() * self.tlcd.damping_correction_factor(velocity)
            + self.tlcd.contraction_damping(velocity)
    }

    /// Overwrite the damper diagonal of `damping` for `step` and record the speed.
    pub fn update(&mut self, step: usize, velocity: f64, damping: &mut DMatrix<f64>) {
        let speed = velocity.abs();
        let c = self.coefficient(speed);
        for d in self.layout.damper_dofs() {
            damping[(d, d)] = c;
        }
        self.record(step, speed);
    }

    /// Record a speed without touching the damping matrix.
    pub fn record(&mut self, step: usize, speed: f64) {
        if let Some(slot) = self.velocity.get_mut(step) {
            *slot = speed;
        }
    }

    pub fn into_history(self) -> Vec<f64> {
        self.velocity
    }
}
