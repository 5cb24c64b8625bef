//! Common utilities for parameter validation.

use crate::error::{StructureError, StructureResult};
use td_core::numeric::ensure_positive;

/// Ensure a value is finite and strictly positive, returning StructureError if not.
pub fn check_positive(value: f64, what: &'static str) -> StructureResult<f64> {
    ensure_positive(value, what).map_err(|_| StructureError::NonPhysical { what, value })
}

/// Ensure a value is finite and not negative.
pub fn check_non_negative(value: f64, what: &'static str) -> StructureResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StructureError::NonPhysical { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert!(check_positive(1.0, "test").is_ok());
        assert!(check_positive(0.0, "test").is_err());
        assert!(check_positive(f64::INFINITY, "test").is_err());
        assert!(check_positive(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative(0.0, "test").is_ok());
        assert!(check_non_negative(-1e-9, "test").is_err());
    }
}
