/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Factorial uses them to turn its operand into an exact count, and `avg` to
/// turn an argument count into a divisor.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or a domain error otherwise.
pub mod num;
