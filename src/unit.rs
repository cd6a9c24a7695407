use std::fmt;

/// One instruction of an analyzed expression.
///
/// The analyzer produces units in postfix order: the evaluator runs them front
/// to back, pushing values and letting each [`Unit::Call`] pop its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// A numeric literal awaiting parse.
    Operand(String),
    /// A value name resolved against the active scope.
    Named(String),
    /// A zero-based positional call argument (`$0`, `$1`, ...).
    Positional(usize),
    /// An operation invocation with its argument count resolved at analysis
    /// time.
    Call {
        /// Canonical or user-given operation name.
        name:           String,
        /// Number of values the call pops.
        argument_count: usize,
    },
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(text) => write!(f, "{text}"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Positional(index) => write!(f, "${index}"),
            Self::Call { name, argument_count } => write!(f, "{name}{{{argument_count}}}"),
        }
    }
}

/// Renders a unit sequence as space-separated postfix text, e.g.
/// `1 2 3 mul{2} sum{2}`.
///
/// # Example
/// ```
/// use reckon::unit::{Unit, render};
///
/// let units = [Unit::Positional(0),
///              Unit::Operand("2".to_string()),
///              Unit::Call { name:           "pow".to_string(),
///                           argument_count: 2, }];
/// assert_eq!(render(&units), "$0 2 pow{2}");
/// ```
#[must_use]
pub fn render(units: &[Unit]) -> String {
    units.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
