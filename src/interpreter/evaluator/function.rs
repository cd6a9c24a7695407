/// Built-in arithmetic and trigonometric helpers.
///
/// Contains the plain functions behind the operator symbols and the
/// cotangent; the rest of the table uses `f64` methods directly.
pub mod builtin;
/// The built-in table.
///
/// Declares the canonical operation names, the list of built-in functions and
/// constants, and registers them on root scopes.
pub mod core;
/// The `fac` (factorial) function implementation.
///
/// Backs the postfix `!` operator.
pub mod factorial;
/// `min`, `max` and `avg` function implementations.
///
/// Variadic reductions over their arguments.
pub mod min_max;
