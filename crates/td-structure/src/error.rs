//! Error types for structural parameter models.

use td_core::error::TdError;
use thiserror::Error;

/// Errors raised while building or evaluating structural/damper models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error("Non-physical value: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Unknown support condition: {name}")]
    UnknownSupport { name: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type StructureResult<T> = Result<T, StructureError>;

impl From<StructureError> for TdError {
    fn from(e: StructureError) -> Self {
        match e {
            StructureError::NonPhysical { what, value } => TdError::NonPositive { what, value },
            StructureError::UnknownSupport { name: _ } => TdError::InvalidArg {
                what: "support condition",
            },
            StructureError::InvalidArg { what } => TdError::InvalidArg { what },
        }
    }
}
