use crate::TdError;

/// Floating point type used throughout system
pub type Real = f64;

/// Slack used when converting a duration into a whole number of steps, so
/// that `50.0 / 0.001` counts 50 000 intervals rather than 49 999.
pub const STEP_ROUNDING_SLACK: Real = 1e-9;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TdError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, TdError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TdError::NonPositive { what, value: v })
    }
}

/// Number of whole `dt` intervals contained in `duration`.
pub fn whole_steps(duration: Real, dt: Real) -> usize {
    if duration <= 0.0 || dt <= 0.0 {
        return 0;
    }
    (duration / dt + STEP_ROUNDING_SLACK).floor() as usize
}

/// Relative Frobenius-norm error `||actual - expected|| / ||expected||`.
///
/// Falls back to the absolute norm of the difference when `expected` is all zeros.
pub fn relative_norm_error(actual: &[Real], expected: &[Real]) -> Result<Real, TdError> {
    if actual.len() != expected.len() {
        return Err(TdError::LengthMismatch {
            what: "relative norm operands",
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    let diff: Real = actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e).powi(2))
        .sum::<Real>()
        .sqrt();
    let reference: Real = expected.iter().map(|e| e * e).sum::<Real>().sqrt();
    if reference == 0.0 {
        Ok(diff)
    } else {
        Ok(diff / reference)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whole_steps_matches_exact_multiples(n in 0usize..100_000, dt_exp in 1i32..5) {
            let dt = 10f64.powi(-dt_exp);
            let duration = n as f64 * dt;
            prop_assert_eq!(whole_steps(duration, dt), n);
        }
    }
}
