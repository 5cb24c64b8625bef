//! Integration method selection.

use std::fmt;
use std::str::FromStr;

use crate::central_difference::CentralDifference;
use crate::error::SolverError;
use crate::integrator::TimeIntegrator;
use crate::newmark::Newmark;
use crate::runge_kutta::RungeKutta4;

/// Name accepted for the modal superposition method, which is not available.
pub const MODAL_SUPERPOSITION: &str = "Modal Superposition Method";

/// Time integration scheme, chosen once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationMethod {
    /// Explicit central differences.
    FiniteDifference,
    /// Newmark with γ = 1/2, β = 1/4 (unconditionally stable).
    #[default]
    AverageAcceleration,
    /// Newmark with γ = 1/2, β = 1/6.
    LinearAcceleration,
    /// Classical 4th-order Runge-Kutta.
    RungeKutta,
}

/// Newmark family parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewmarkParameters {
    pub gamma: f64,
    pub beta: f64,
}

impl NewmarkParameters {
    pub fn average_acceleration() -> Self {
        Self {
            gamma: 0.5,
            beta: 0.25,
        }
    }

    pub fn linear_acceleration() -> Self {
        Self {
            gamma: 0.5,
            beta: 1.0 / 6.0,
        }
    }
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 4] = [
        Self::FiniteDifference,
        Self::AverageAcceleration,
        Self::LinearAcceleration,
        Self::RungeKutta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FiniteDifference => "Finite Differences Method",
            Self::AverageAcceleration => "Average Acceleration Method",
            Self::LinearAcceleration => "Linear Acceleration Method",
            Self::RungeKutta => "Runge-Kutta Method",
        }
    }

    /// The scheme implementing this method.
    pub fn integrator(self) -> Box<dyn TimeIntegrator + Send + Sync> {
        match self {
            Self::FiniteDifference => Box::new(CentralDifference),
            Self::AverageAcceleration => Box::new(Newmark::average_acceleration()),
            Self::LinearAcceleration => Box::new(Newmark::linear_acceleration()),
            Self::RungeKutta => Box::new(RungeKutta4),
        }
    }

    pub fn newmark_parameters(self) -> Option<NewmarkParameters> {
        match self {
            Self::AverageAcceleration => Some(NewmarkParameters::average_acceleration()),
            Self::LinearAcceleration => Some(NewmarkParameters::linear_acceleration()),
            _ => None,
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegrationMethod {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == MODAL_SUPERPOSITION {
            return Err(SolverError::configuration(format!(
                "{MODAL_SUPERPOSITION} is not implemented"
            )));
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| {
                SolverError::configuration(format!("unknown integration method: {name}"))
            })
    }
}
