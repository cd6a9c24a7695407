use logos::Logos;

use crate::error::ParseError;

/// Kind of a lexical token.
///
/// The lexer is generated by `logos`; [`Tokenizer`] wraps it to validate
/// literals and strip the decorations (`$`, trailing `(`) from raw texts.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`. The regex also accepts
    /// extra points so that `1..2` is reported as one malformed literal.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// Identifier tokens; value names such as `x`, `pi` or `α1`. Any Unicode
    /// letter starts one, followed by letters and digits.
    #[regex(r"\p{L}[\p{L}\p{N}]*")]
    Identifier,
    /// Positional argument references such as `$0`.
    #[regex(r"\$[0-9]+")]
    AnonymousArgument,
    /// `+`, `-`, `*`, `/`, `^`, `!` and `√`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    #[token("!")]
    #[token("√")]
    Operator,
    /// `(`
    #[token("(")]
    OpenScope,
    /// `)`
    #[token(")")]
    CloseScope,
    /// `,`
    #[token(",")]
    ArgumentSeparator,
    /// An identifier immediately followed by `(`, such as `sin(`.
    #[regex(r"\p{L}[\p{L}\p{N}]*\(")]
    Function,
}

/// A classified slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind:     TokenKind,
    /// The meaningful text: the name of a function without its `(`, the index
    /// digits of a positional argument without its `$`.
    pub raw:      &'a str,
    /// Byte offset of the token in the trimmed source.
    pub position: usize,
}

impl<'a> Token<'a> {
    fn classify(kind: TokenKind, slice: &'a str, position: usize) -> Result<Self, ParseError> {
        let raw = match kind {
            TokenKind::Number => {
                if slice.parse::<f64>().is_err() {
                    return Err(ParseError::MalformedNumber { literal: slice.to_string(),
                                                             position });
                }
                slice
            },
            TokenKind::Function => &slice[..slice.len() - 1],
            TokenKind::AnonymousArgument => &slice[1..],
            TokenKind::Identifier
            | TokenKind::Operator
            | TokenKind::OpenScope
            | TokenKind::CloseScope
            | TokenKind::ArgumentSeparator => slice,
        };

        Ok(Self { kind, raw, position })
    }
}

/// Scans an expression left to right, one token at a time.
///
/// The source is trimmed on construction. The sequence is lazy, finite and
/// cannot be restarted.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new(" 2sin($0) ");
/// let mut kinds = Vec::new();
/// while tokenizer.has_next() {
///     kinds.push(tokenizer.next_token().unwrap().kind);
/// }
///
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Function,
///             TokenKind::AnonymousArgument,
///             TokenKind::CloseScope]);
/// ```
pub struct Tokenizer<'a> {
    lexer:   logos::Lexer<'a, TokenKind>,
    pending: Option<Result<Token<'a>, ParseError>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the trimmed `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer:   TokenKind::lexer(source.trim()),
               pending: None, }
    }

    /// Returns `true` while at least one more token (or lexical error) remains.
    pub fn has_next(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.scan();
        }
        self.pending.is_some()
    }

    /// Returns the next token and advances.
    ///
    /// # Errors
    /// Fails on an unrecognized symbol, a malformed number, or when no input
    /// remains.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        match self.pending.take().or_else(|| self.scan()) {
            Some(token) => token,
            None => Err(ParseError::UnexpectedEndOfInput { position: self.lexer.source().len() }),
        }
    }

    fn scan(&mut self) -> Option<Result<Token<'a>, ParseError>> {
        let kind = self.lexer.next()?;
        let slice = self.lexer.slice();
        let position = self.lexer.span().start;

        Some(match kind {
                 Ok(kind) => Token::classify(kind, slice, position),
                 Err(()) => Err(ParseError::UnexpectedSymbol { symbol: slice.to_string(),
                                                               position }),
             })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.take().or_else(|| self.scan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<(TokenKind, &str)> {
        Tokenizer::new(source).map(|token| {
                                  let token = token.unwrap();
                                  (token.kind, token.raw)
                              })
                              .collect()
    }

    #[test]
    fn numbers_keep_their_point() {
        assert_eq!(tokens("1.5 + 20"),
                   [(TokenKind::Number, "1.5"), (TokenKind::Operator, "+"), (TokenKind::Number, "20")]);
    }

    #[test]
    fn function_drops_bracket_and_argument_drops_dollar() {
        assert_eq!(tokens("max($12, x1)"),
                   [(TokenKind::Function, "max"),
                    (TokenKind::AnonymousArgument, "12"),
                    (TokenKind::ArgumentSeparator, ","),
                    (TokenKind::Identifier, "x1"),
                    (TokenKind::CloseScope, ")")]);
    }

    #[test]
    fn space_before_bracket_is_not_a_call() {
        assert_eq!(tokens("sin (0)"),
                   [(TokenKind::Identifier, "sin"),
                    (TokenKind::OpenScope, "("),
                    (TokenKind::Number, "0"),
                    (TokenKind::CloseScope, ")")]);
    }

    #[test]
    fn identifiers_accept_unicode_letters() {
        assert_eq!(tokens("2α + ωb(θ1)"),
                   [(TokenKind::Number, "2"),
                    (TokenKind::Identifier, "α"),
                    (TokenKind::Operator, "+"),
                    (TokenKind::Function, "ωb"),
                    (TokenKind::Identifier, "θ1"),
                    (TokenKind::CloseScope, ")")]);
    }

    #[test]
    fn square_root_and_factorial_are_operators() {
        assert_eq!(tokens("√4!"),
                   [(TokenKind::Operator, "√"), (TokenKind::Number, "4"), (TokenKind::Operator, "!")]);
    }

    #[test]
    fn second_point_is_lexical_error() {
        let err = Tokenizer::new("1..2").next_token().unwrap_err();
        assert_eq!(err,
                   ParseError::MalformedNumber { literal:  "1..2".to_string(),
                                                 position: 0, });
    }

    #[test]
    fn unknown_symbol_is_reported_with_position() {
        let err = Tokenizer::new("1 # 2").nth(1).unwrap().unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedSymbol { symbol:   "#".to_string(),
                                                  position: 2, });
    }

    #[test]
    fn bare_dollar_is_rejected() {
        assert!(Tokenizer::new("$").next_token().is_err());
    }

    #[test]
    fn exhausted_tokenizer_fails() {
        let mut tokenizer = Tokenizer::new("   ");
        assert!(!tokenizer.has_next());
        assert_eq!(tokenizer.next_token(),
                   Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    }
}
