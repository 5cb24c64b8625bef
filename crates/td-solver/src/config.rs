//! Analysis configuration.

use crate::error::{SolverError, SolverResult};
use crate::method::IntegrationMethod;
use td_core::numeric::{ensure_finite, ensure_positive};
use td_structure::FluidProperties;

/// Options for one dynamic analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub method: IntegrationMethod,
    /// Fixed time step (seconds)
    pub time_step: f64,
    /// Initial displacement applied to every DOF (m)
    pub initial_displacement: f64,
    /// Initial velocity applied to every DOF (m/s)
    pub initial_velocity: f64,
    /// Update the damper damping from the liquid velocity at every step
    pub nonlinear_analysis: bool,
    /// Structural damping ratio (fraction of critical)
    pub damping_ratio: f64,
    /// Liquid constants used by the damper
    pub fluid: FluidProperties,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::default(),
            time_step: 1e-3,
            initial_displacement: 0.0,
            initial_velocity: 0.0,
            nonlinear_analysis: false,
            damping_ratio: 0.02,
            fluid: FluidProperties::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> SolverResult<()> {
        ensure_positive(self.time_step, "time step")?;
        ensure_finite(self.initial_displacement, "initial displacement")?;
        ensure_finite(self.initial_velocity, "initial velocity")?;
        ensure_finite(self.damping_ratio, "damping ratio")?;
        if self.damping_ratio < 0.0 {
            return Err(SolverError::configuration(format!(
                "damping ratio must be non-negative, got {}",
                self.damping_ratio
            )));
        }
        self.fluid.validate()?;
        Ok(())
    }
}
