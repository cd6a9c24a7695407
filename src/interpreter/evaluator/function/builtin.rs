/// Adds all arguments. Backs the `+` operator and `sum(...)`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// assert!(sum(&[]).is_sign_positive());
/// ```
#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    // `Sum` for floats starts at -0.0
    args.iter().fold(0.0, |acc, x| acc + x)
}

/// Multiplies all arguments. Backs the `*` operator, implicit multiplication
/// and `mul(...)`.
#[must_use]
pub fn mul(args: &[f64]) -> f64 {
    args.iter().product()
}

#[must_use]
pub fn sub(left: f64, right: f64) -> f64 {
    left - right
}

/// IEEE division: a zero divisor yields an infinity or NaN.
#[must_use]
pub fn div(left: f64, right: f64) -> f64 {
    left / right
}

#[must_use]
pub fn neg(value: f64) -> f64 {
    -value
}

/// Cotangent.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::ctg;
///
/// let x = std::f64::consts::FRAC_PI_4;
/// assert!((ctg(x) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn ctg(value: f64) -> f64 {
    value.tan().recip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum_is_positive_zero() {
        assert_eq!(sum(&[]).to_bits(), 0.0f64.to_bits());
        assert_eq!(mul(&[]), 1.0);
    }

    #[test]
    fn cotangent_is_reciprocal_tangent() {
        assert_eq!(ctg(1.0), 1.0 / 1.0f64.tan());
    }
}
