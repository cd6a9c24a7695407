use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns an `InvalidArgument` error if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use reckon::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234).unwrap(), 1234.0);
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked(value: u64) -> EvalResult<f64> {
    if value > MAX_SAFE_U64_INT {
        return Err(RuntimeError::invalid_argument(format!("{value} is too large to be represented exactly")));
    }

    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns an error if the value exceeds `MAX_SAFE_U64_INT`.
pub fn usize_to_f64_checked(value: usize) -> EvalResult<f64> {
    let value = u64::try_from(value).map_err(|_| {
                                        RuntimeError::invalid_argument("count does not fit in 64 bits")
                                    })?;
    u64_to_f64_checked(value)
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns an `InvalidArgument` error for non-finite, negative, out-of-range,
/// or fractional values.
///
/// ## Example
/// ```
/// use reckon::{error::RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0).unwrap(), 7);
///
/// let err = f64_to_u64_checked(-5.0).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
///
/// let err = f64_to_u64_checked(1.23).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> EvalResult<u64> {
    if !value.is_finite() {
        return Err(RuntimeError::invalid_argument(format!("{value} is not a finite number")));
    }
    if value < 0.0 {
        return Err(RuntimeError::invalid_argument(format!("{value} is negative")));
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::invalid_argument(format!("{value} is too large")));
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::invalid_argument(format!("{value} is fractional")));
    }
    Ok(value as u64)
}
