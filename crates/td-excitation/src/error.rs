//! Error types for excitation histories.

use td_core::error::TdError;
use thiserror::Error;

/// Errors raised while building or sampling an excitation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExcitationError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Record length mismatch: {times} time samples vs {accelerations} accelerations")]
    LengthMismatch { times: usize, accelerations: usize },

    #[error("Grid time {time} s precedes the first record sample at {first} s")]
    InterpolationRange { time: f64, first: f64 },

    #[error("Record samples {index} and {} snap to the same grid step (dt = {dt} s)", .index + 1)]
    SamplesTooClose { index: usize, dt: f64 },
}

pub type ExcitationResult<T> = Result<T, ExcitationError>;

impl From<TdError> for ExcitationError {
    fn from(e: TdError) -> Self {
        match e {
            TdError::NonFinite { what, value } | TdError::NonPositive { what, value } => {
                ExcitationError::NonPhysical { what, value }
            }
            TdError::InvalidArg { what } => ExcitationError::InvalidArg { what },
            TdError::LengthMismatch {
                expected, actual, ..
            } => ExcitationError::LengthMismatch {
                times: expected,
                accelerations: actual,
            },
        }
    }
}
