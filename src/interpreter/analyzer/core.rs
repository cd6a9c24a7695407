use crate::{
    error::ParseError,
    interpreter::{
        analyzer::operation::{OperationInfo, Priority},
        lexer::{Token, TokenKind, Tokenizer},
    },
    unit::Unit,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Analyzes `source` into a postfix unit sequence.
///
/// This is the entry point of the analysis stage. See [`Analyzer`] for the
/// rules it applies.
///
/// # Errors
/// Returns a lexical error from the tokenizer, or a structural error when the
/// expression is empty, incomplete or unbalanced.
///
/// # Example
/// ```
/// use reckon::{interpreter::analyzer::core::analyze, unit::render};
///
/// let units = analyze("6/2(1+2)").unwrap();
/// assert_eq!(render(&units), "6 2 1 2 sum{2} mul{2} div{2}");
/// ```
pub fn analyze(source: &str) -> ParseResult<Vec<Unit>> {
    Analyzer::new(source).run()
}

/// Operator-precedence analyzer.
///
/// A shunting-yard pass over the tokens with three additions:
/// - a `-` that follows no value is unary negation;
/// - two juxtaposed values are joined by a synthesized multiplication;
/// - calls count their arguments from the separators they see.
///
/// `completed` is set when the last thing produced yields a value: an
/// operand, a closed scope or a postfix factorial.
pub struct Analyzer<'a> {
    tokenizer:  Tokenizer<'a>,
    units:      Vec<Unit>,
    operations: Vec<OperationInfo>,
    completed:  bool,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { tokenizer:  Tokenizer::new(source),
               units:      Vec::new(),
               operations: Vec::new(),
               completed:  false, }
    }

    /// Consumes every token and returns the units in evaluation order.
    ///
    /// # Errors
    /// See [`analyze`].
    pub fn run(mut self) -> ParseResult<Vec<Unit>> {
        while self.tokenizer.has_next() {
            let token = self.tokenizer.next_token()?;

            match token.kind {
                TokenKind::Number => self.push_operand(Unit::Operand(token.raw.to_string())),
                TokenKind::Identifier => self.push_operand(Unit::Named(token.raw.to_string())),
                TokenKind::AnonymousArgument => {
                    let index = parse_argument_index(&token)?;
                    self.push_operand(Unit::Positional(index));
                },
                TokenKind::Operator | TokenKind::OpenScope => {
                    if self.is_minus_sign(&token) {
                        self.push_minus_sign();
                    } else {
                        self.push_operator(&token)?;
                    }
                },
                TokenKind::Function => self.push_function(token.raw),
                TokenKind::ArgumentSeparator => self.flush_scope(&token, false)?,
                TokenKind::CloseScope => self.flush_scope(&token, true)?,
            }
        }

        self.finish()
    }

    fn push_operand(&mut self, unit: Unit) {
        if self.completed {
            self.push_implicit_multiplication();
        }
        self.units.push(unit);
        self.completed = true;
    }

    fn push_function(&mut self, name: &str) {
        if self.completed {
            self.push_implicit_multiplication();
        }
        self.operations.push(OperationInfo::function(name));
        self.completed = false;
    }

    fn push_operator(&mut self, token: &Token<'_>) -> ParseResult<()> {
        let operation =
            OperationInfo::operator(token.raw).ok_or_else(|| ParseError::UnexpectedSymbol { symbol:   token.raw.to_string(),
                                                                                            position: token.position, })?;

        if operation.is_prefix() {
            // A prefix operator has nothing on its left to resolve.
            if self.completed {
                self.push_implicit_multiplication();
            }
        } else {
            if !self.completed {
                return Err(ParseError::MissingOperand { operator: token.raw.to_string(),
                                                        position: token.position, });
            }
            self.flush_binding(operation.priority);
        }

        self.completed = operation.is_postfix();
        self.operations.push(operation);
        Ok(())
    }

    fn push_implicit_multiplication(&mut self) {
        self.flush_binding(Priority::Implicit);
        self.operations.push(OperationInfo::implicit_multiplication());
        self.completed = false;
    }

    fn push_minus_sign(&mut self) {
        self.operations.push(OperationInfo::negative());
        self.completed = false;
    }

    fn is_minus_sign(&self, token: &Token<'_>) -> bool {
        token.raw == "-" && !self.completed
    }

    /// Handles `,` and `)`: resolves everything since the innermost barrier and
    /// counts the finished argument.
    fn flush_scope(&mut self, token: &Token<'_>, close: bool) -> ParseResult<()> {
        while let Some(top) = self.operations.last()
              && !top.is_barrier()
        {
            self.flush_top();
        }

        let completed = self.completed;
        let Some(barrier) = self.operations.last_mut() else {
            return Err(ParseError::UnmatchedClosing { token:    token.raw.to_string(),
                                                      position: token.position, });
        };

        if close {
            if completed {
                barrier.add_argument();
            } else if barrier.is_scope() || barrier.argument_count > 0 {
                // Only a call may close with nothing inside: `f()`.
                return Err(ParseError::EmptyArgument { position: token.position });
            }
            self.flush_top();
        } else {
            if barrier.is_scope() {
                return Err(ParseError::SeparatorOutsideCall { position: token.position });
            }
            if !completed {
                return Err(ParseError::EmptyArgument { position: token.position });
            }
            barrier.add_argument();
        }

        self.completed = close;
        Ok(())
    }

    /// Pops every non-barrier operation that binds at least as tightly as
    /// `priority`. Equal priorities are popped, so chains fold left.
    fn flush_binding(&mut self, priority: Priority) {
        while let Some(top) = self.operations.last()
              && !top.is_barrier()
              && top.priority >= priority
        {
            self.flush_top();
        }
    }

    fn flush_top(&mut self) {
        if let Some(operation) = self.operations.pop()
           && !operation.is_scope()
        {
            self.units.push(Unit::Call { name:           operation.name,
                                         argument_count: operation.argument_count, });
        }
    }

    fn finish(mut self) -> ParseResult<Vec<Unit>> {
        if !self.completed {
            if self.units.is_empty() && self.operations.is_empty() {
                return Err(ParseError::EmptyExpression);
            }
            return Err(ParseError::IncompleteExpression);
        }

        while let Some(operation) = self.operations.last() {
            if operation.is_barrier() {
                let name = if operation.is_scope() { "(" } else { operation.name.as_str() };
                return Err(ParseError::UnclosedScope { name: name.to_string() });
            }
            self.flush_top();
        }

        tracing::trace!(units = self.units.len(), "expression analyzed");
        Ok(self.units)
    }
}

fn parse_argument_index(token: &Token<'_>) -> ParseResult<usize> {
    token.raw.parse().map_err(|_| ParseError::MalformedNumber { literal:  format!("${}", token.raw),
                                                                position: token.position, })
}
