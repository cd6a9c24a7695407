use crate::error::ErrorKind;

/// Represents all errors that can occur while evaluating an analyzed
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A value name absent from the whole scope chain.
    #[error("Unknown value '{name}'.")]
    UnknownValue {
        /// The name of the value.
        name: String,
    },
    /// A function name absent from the whole scope chain.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A fixed-arity operation was called with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The name the operation was called by.
        name:     String,
        /// The arity the operation requires.
        expected: usize,
        /// The argument count at the call site.
        found:    usize,
    },
    /// A positional argument beyond the supplied argument list.
    #[error("Positional argument ${index} is out of bounds: {supplied} argument(s) supplied.")]
    ArgumentOutOfBounds {
        /// The requested zero-based index.
        index:    usize,
        /// The number of arguments actually supplied.
        supplied: usize,
    },
    /// An operation's mathematical domain was violated.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A number literal the numeric parser rejected.
    ///
    /// The lexer validates literals, so this is only raised for unit sequences
    /// that did not come from the analyzer.
    #[error("Invalid number literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
    },
    /// The unit sequence left the value stack in an impossible state.
    ///
    /// Analyzed sequences are always balanced; like `InvalidLiteral`, this
    /// guards hand-built sequences.
    #[error("Malformed unit sequence: {details}.")]
    MalformedProgram {
        /// What went wrong.
        details: String,
    },
    /// Sub-expression calls nested deeper than the evaluator allows, usually a
    /// definition that calls itself.
    #[error("Call to '{name}' exceeds the nesting limit of {limit} sub-expression calls.")]
    RecursionLimit {
        /// The sub-expression whose call crossed the limit.
        name:  String,
        /// The maximum nesting depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{ErrorKind, RuntimeError};
    ///
    /// let err = RuntimeError::UnknownValue { name: "x".to_string() };
    /// assert_eq!(err.kind(), ErrorKind::UnknownName);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownValue { .. } | Self::UnknownFunction { .. } => ErrorKind::UnknownName,
            Self::ArgumentCountMismatch { .. } | Self::ArgumentOutOfBounds { .. } => {
                ErrorKind::Arity
            },
            Self::InvalidArgument { .. } => ErrorKind::Domain,
            Self::InvalidLiteral { .. } => ErrorKind::Lexical,
            Self::MalformedProgram { .. } | Self::RecursionLimit { .. } => ErrorKind::Structural,
        }
    }

    pub(crate) fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument { details: details.into() }
    }
}
