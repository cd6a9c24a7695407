use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_u64_checked, u64_to_f64_checked},
};

/// Computes `n!` for a non-negative integral `n`.
///
/// The product is accumulated in `f64`, so large operands overflow to
/// infinity rather than failing.
///
/// # Errors
/// `InvalidArgument` for negative, fractional or non-finite operands.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::factorial::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!(factorial(-1.0).is_err());
/// ```
pub fn factorial(value: f64) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(RuntimeError::invalid_argument(format!("Factorial not defined for negative value {value}")));
    }
    let n = f64_to_u64_checked(value).map_err(|_| {
                                           RuntimeError::invalid_argument(format!("Factorial only defined for integers, but found {value}"))
                                       })?;

    let mut result = 1.0;
    for k in 2..=n {
        result *= u64_to_f64_checked(k)?;
        if result.is_infinite() {
            break;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(3.0), Ok(6.0));
        assert_eq!(factorial(10.0), Ok(3_628_800.0));
    }

    #[test]
    fn huge_factorial_overflows_to_infinity() {
        assert_eq!(factorial(200.0), Ok(f64::INFINITY));
    }

    #[test]
    fn domain_errors() {
        assert!(matches!(factorial(-3.0), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(factorial(2.5), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(factorial(f64::NAN), Err(RuntimeError::InvalidArgument { .. })));
    }
}
