/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and analysis of an
/// expression: unreadable symbols, malformed literals, and structurally
/// incomplete or unbalanced expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine runs:
/// unknown names, argument count mismatches and domain violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Broad category of a failure, independent of the stage that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unparseable character sequence or malformed literal.
    Lexical,
    /// Incomplete, unbalanced or empty expression, or sub-expression calls
    /// nested past the limit.
    Structural,
    /// A name absent from the whole scope chain.
    UnknownName,
    /// Wrong argument count, or a positional index out of bounds.
    Arity,
    /// An operation's mathematical domain was violated.
    Domain,
}

/// Any failure of an evaluation request.
///
/// Errors raised inside nested sub-expressions propagate through this type
/// unchanged, so [`Error::kind`] always reports where the failure started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Tokenizing or analysis failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The stack machine failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the category of the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_survive_wrapping() {
        let lexical: Error = ParseError::UnexpectedSymbol { symbol:   "#".to_string(),
                                                            position: 3, }.into();
        assert_eq!(lexical.kind(), ErrorKind::Lexical);

        let arity: Error = RuntimeError::ArgumentOutOfBounds { index:    1,
                                                               supplied: 1, }.into();
        assert_eq!(arity.kind(), ErrorKind::Arity);
    }

    #[test]
    fn display_is_transparent() {
        let err: Error = RuntimeError::UnknownFunction { name: "foo".to_string() }.into();
        assert_eq!(err.to_string(), "Unknown function 'foo'.");
    }
}
