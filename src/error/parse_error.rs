use crate::error::ErrorKind;

/// Represents all errors that can occur while tokenizing or analyzing an
/// expression.
///
/// Positions are byte offsets into the trimmed source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character sequence that matches no lexical rule.
    #[error("Error at {position}: Unexpected symbol '{symbol}'.")]
    UnexpectedSymbol {
        /// The offending text.
        symbol:   String,
        /// Byte offset of the symbol.
        position: usize,
    },
    /// A number literal that cannot be read, such as `1..2`.
    #[error("Error at {position}: Malformed number literal '{literal}'.")]
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// The tokenizer was asked for a token after the end of input.
    #[error("Error at {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Length of the source.
        position: usize,
    },
    /// The source contains no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// The expression ends where a value is still expected.
    #[error("Expression is incomplete: a value is expected at the end.")]
    IncompleteExpression,
    /// A `)` or `,` with no open scope or call to belong to.
    #[error("Error at {position}: Unmatched '{token}'.")]
    UnmatchedClosing {
        /// The closing token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A scope or function call that is never closed.
    #[error("Scope '{name}' is never closed.")]
    UnclosedScope {
        /// `(` for a bare scope, otherwise the function name.
        name: String,
    },
    /// A binary or postfix operator with nothing on its left.
    #[error("Error at {position}: Operator '{operator}' is missing its left operand.")]
    MissingOperand {
        /// The operator symbol.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A call argument or scope with nothing inside, such as `f(1,,2)` or `()`.
    #[error("Error at {position}: Empty argument.")]
    EmptyArgument {
        /// Byte offset of the separator or closer that ends the empty slot.
        position: usize,
    },
    /// An argument separator inside bare parentheses, such as `(1, 2)`.
    #[error("Error at {position}: Argument separator outside of a function call.")]
    SeparatorOutsideCall {
        /// Byte offset of the separator.
        position: usize,
    },
}

impl ParseError {
    /// Classifies the error as lexical or structural.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::MalformedNumber { literal:  "1..2".to_string(),
    ///                                         position: 0, };
    /// assert_eq!(err.kind(), ErrorKind::Lexical);
    /// assert_eq!(ParseError::IncompleteExpression.kind(), ErrorKind::Structural);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedSymbol { .. } | Self::MalformedNumber { .. } => ErrorKind::Lexical,
            Self::UnexpectedEndOfInput { .. }
            | Self::EmptyExpression
            | Self::IncompleteExpression
            | Self::UnmatchedClosing { .. }
            | Self::UnclosedScope { .. }
            | Self::MissingOperand { .. }
            | Self::EmptyArgument { .. }
            | Self::SeparatorOutsideCall { .. } => ErrorKind::Structural,
        }
    }
}
