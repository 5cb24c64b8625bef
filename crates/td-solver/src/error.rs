//! Error types for assembly and time integration.

use td_core::error::TdError;
use td_excitation::ExcitationError;
use td_structure::StructureError;
use thiserror::Error;

/// Errors that abort an analysis. None of them are retried: every failure is
/// a deterministic consequence of the inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Unknown method, unsupported option or inconsistent inputs, detected
    /// before any matrix work.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// A required matrix solve hit a non-invertible matrix.
    #[error("Singular system: {what} is not invertible")]
    Singular { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Excitation(#[from] ExcitationError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }
}

impl From<TdError> for SolverError {
    fn from(e: TdError) -> Self {
        SolverError::Configuration {
            what: e.to_string(),
        }
    }
}
