use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::usize_to_f64_checked,
};

/// Computes the minimum or maximum of any number of values.
///
/// Values are compared with `OrderedFloat`, which ranks NaN above every other
/// value. The operation is selected by `name`, which must be `"min"` or
/// `"max"`.
///
/// # Errors
/// `InvalidArgument` when called without arguments.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, -1.0, 7.0]).unwrap(), -1.0);
/// assert_eq!(min_max("max", &[2.5, 1.0]).unwrap(), 2.5);
/// assert!(min_max("max", &[]).is_err());
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    let values = args.iter().copied().map(OrderedFloat);
    let result = if name == "min" { values.min() } else { values.max() };

    result.map(OrderedFloat::into_inner)
          .ok_or_else(|| RuntimeError::invalid_argument(format!("{name} needs at least one argument")))
}

/// Arithmetic mean of the arguments.
///
/// # Errors
/// `InvalidArgument` when called without arguments.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::min_max::avg;
///
/// assert_eq!(avg(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// ```
pub fn avg(args: &[f64]) -> EvalResult<f64> {
    if args.is_empty() {
        return Err(RuntimeError::invalid_argument("avg needs at least one argument"));
    }
    Ok(args.iter().sum::<f64>() / usize_to_f64_checked(args.len())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_its_own_extreme() {
        assert_eq!(min_max("min", &[4.0]), Ok(4.0));
        assert_eq!(min_max("max", &[4.0]), Ok(4.0));
        assert_eq!(avg(&[4.0]), Ok(4.0));
    }

    #[test]
    fn empty_argument_lists_are_domain_errors() {
        assert!(matches!(min_max("min", &[]), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(avg(&[]), Err(RuntimeError::InvalidArgument { .. })));
    }
}
