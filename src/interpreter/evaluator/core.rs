use once_cell::unsync::OnceCell;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        analyzer::core::analyze,
        evaluator::{
            function::core::register_builtins,
            operation::Definition,
            scope::{Bindings, Scope, resolve_function},
        },
    },
    unit::Unit,
};

/// Result type used by the evaluator's operations.
///
/// All built-in and user operations return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An expression together with the scope it is evaluated in.
///
/// The source text is fixed at construction. It is analyzed on the first
/// evaluation and the unit sequence is reused afterwards; bindings are resolved
/// on every evaluation, so names defined after the first call are still seen.
///
/// ## Usage
///
/// ```
/// use reckon::Expression;
///
/// let mut expression = Expression::new("hypotenuse($0, $1) * k");
/// expression.define("hypotenuse", "√($0 ^ 2 + $1 ^ 2)");
/// expression.define("k", 2.0);
///
/// assert_eq!(expression.evaluate(&[3.0, 4.0]).unwrap(), 10.0);
/// assert_eq!(expression.evaluate(&[6.0, 8.0]).unwrap(), 20.0);
/// ```
pub struct Expression<'p> {
    source:   String,
    units:    OnceCell<Vec<Unit>>,
    bindings: Bindings,
    parent:   Option<&'p dyn Scope>,
}

impl Expression<'static> {
    /// Creates a root expression with every built-in operation and constant
    /// registered.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        let mut expression = Self::nested(source);
        register_builtins(&mut expression.bindings);
        expression
    }

    /// Creates an expression with empty bindings and no parent. Used for
    /// sub-expressions, which receive their parent when they are called.
    pub(crate) fn nested(source: impl Into<String>) -> Self {
        Self { source:   source.into(),
               units:    OnceCell::new(),
               bindings: Bindings::default(),
               parent:   None, }
    }
}

impl<'p> Expression<'p> {
    /// Creates an expression whose lookups fall back to `parent`.
    ///
    /// No built-ins are registered locally; they resolve through the parent.
    ///
    /// # Example
    /// ```
    /// use reckon::Expression;
    ///
    /// let mut outer = Expression::new("0");
    /// outer.define("rate", 0.5);
    ///
    /// let inner = Expression::with_parent("max(rate, 0.25) * 4", &outer);
    /// assert_eq!(inner.evaluate(&[]).unwrap(), 2.0);
    /// ```
    #[must_use]
    pub fn with_parent(source: impl Into<String>, parent: &'p dyn Scope) -> Self {
        Self { source:   source.into(),
               units:    OnceCell::new(),
               bindings: Bindings::default(),
               parent:   Some(parent), }
    }

    /// The source text this expression was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Binds `name` in this scope: a constant, an [`Operation`], or the source
    /// text of a sub-expression.
    ///
    /// [`Operation`]: crate::Operation
    pub fn define(&mut self, name: impl Into<String>, definition: impl Into<Definition>) {
        match definition.into() {
            Definition::Value(value) => self.bindings.insert_value(name, value),
            Definition::Operation(operation) => self.bindings.insert_operation(name, operation),
        }
    }

    /// Returns the analyzed unit sequence, analyzing the source on first use.
    ///
    /// # Errors
    /// Returns the analyzer's error. A failed analysis is not cached.
    pub fn units(&self) -> Result<&[Unit], ParseError> {
        self.units
            .get_or_try_init(|| {
                tracing::debug!(source = %self.source, "analyzing expression");
                analyze(&self.source)
            })
            .map(Vec::as_slice)
    }

    /// Evaluates the expression with the given positional arguments.
    ///
    /// # Errors
    /// Any lexical or structural error of the source, an unknown name, an
    /// argument count mismatch, or a domain error raised by an operation.
    pub fn evaluate(&self, arguments: &[f64]) -> Result<f64, Error> {
        self.evaluate_in(self, arguments, 0)
    }

    /// Runs the unit sequence as a stack machine, resolving names in `scope`.
    ///
    /// `depth` counts the sub-expression calls enclosing this evaluation.
    pub(crate) fn evaluate_in(&self,
                              scope: &dyn Scope,
                              arguments: &[f64],
                              depth: usize)
                              -> Result<f64, Error> {
        let units = self.units()?;
        let mut stack: Vec<f64> = Vec::with_capacity(units.len());

        for unit in units {
            match unit {
                Unit::Operand(text) => stack.push(parse_operand(text)?),
                Unit::Named(name) => stack.push(scope.get_value(name)?),
                Unit::Positional(index) => {
                    let value =
                        arguments.get(*index)
                                 .copied()
                                 .ok_or(RuntimeError::ArgumentOutOfBounds { index:    *index,
                                                                            supplied: arguments.len(), })?;
                    stack.push(value);
                },
                Unit::Call { name, argument_count } => {
                    let (operation, owner) = resolve_function(scope, name)?;
                    let start = stack.len().checked_sub(*argument_count).ok_or_else(|| {
                                    RuntimeError::MalformedProgram { details: format!("'{name}' needs {argument_count} value(s) but the stack holds {}",
                                                                                      stack.len()) }
                                })?;
                    let operands = stack.split_off(start);
                    stack.push(operation.invoke(name, &operands, owner, depth)?);
                },
            }
        }

        match stack.as_slice() {
            &[result] => Ok(result),
            values => Err(RuntimeError::MalformedProgram { details: format!("{} value(s) left on the stack",
                                                                            values.len()) }.into()),
        }
    }
}

impl Scope for Expression<'_> {
    fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    fn parent(&self) -> Option<&dyn Scope> {
        self.parent
    }
}

fn parse_operand(text: &str) -> Result<f64, RuntimeError> {
    text.parse().map_err(|_| RuntimeError::InvalidLiteral { literal: text.to_string() })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::evaluator::operation::{MAX_CALL_DEPTH, Operation},
    };

    #[test]
    fn analysis_runs_once() {
        let expression = Expression::new("1 + 2");
        let first = expression.units().unwrap().as_ptr();
        let second = expression.units().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn later_bindings_are_visible() {
        let mut expression = Expression::new("x * 2");
        assert_eq!(expression.evaluate(&[]).unwrap_err().kind(), ErrorKind::UnknownName);

        expression.define("x", 4.0);
        assert_eq!(expression.evaluate(&[]), Ok(8.0));

        expression.define("x", 5.0);
        assert_eq!(expression.evaluate(&[]), Ok(10.0));
    }

    #[test]
    fn operations_are_called_per_evaluation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut expression = Expression::new("tick($0)");
        expression.define("tick",
                          Operation::unary(move |x| {
                              counter.set(counter.get() + 1);
                              x
                          }));

        assert_eq!(expression.evaluate(&[1.0]), Ok(1.0));
        assert_eq!(expression.evaluate(&[2.0]), Ok(2.0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn sub_expression_sees_defining_scope() {
        let mut expression = Expression::new("scaled(2)");
        expression.define("factor", 3.0);
        expression.define("scaled", "$0 * factor");
        assert_eq!(expression.evaluate(&[]), Ok(6.0));
    }

    #[test]
    fn sub_expression_arguments_are_its_own() {
        let mut expression = Expression::new("first(10) + $0");
        expression.define("first", "$0");
        assert_eq!(expression.evaluate(&[1.0]), Ok(11.0));

        let mut expression = Expression::new("second(10)");
        expression.define("second", "$1");
        let err = expression.evaluate(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err,
                   Error::Runtime(RuntimeError::ArgumentOutOfBounds { index:    1,
                                                                      supplied: 1, }));
    }

    #[test]
    fn fixed_arity_is_checked_at_call_time() {
        let expression = Expression::new("sin(1, 2)");
        assert_eq!(expression.evaluate(&[]),
                   Err(Error::Runtime(RuntimeError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                                            expected: 1,
                                                                            found:    2, })));
    }

    #[test]
    fn zero_argument_call_reaches_variadic() {
        let mut expression = Expression::new("seven() + 1");
        expression.define("seven", Operation::variadic(|_| 7.0));
        assert_eq!(expression.evaluate(&[]), Ok(8.0));
    }

    #[test]
    fn parent_expression_bindings_are_inherited() {
        let mut outer = Expression::new("0");
        outer.define("a", 2.0);
        let mut inner = Expression::with_parent("a + b", &outer);
        inner.define("b", 3.0);

        assert_eq!(inner.evaluate(&[]), Ok(5.0));
        assert!(inner.has_value("a"));
        assert!(!outer.has_value("b"));
    }

    #[test]
    fn self_calling_definition_hits_the_nesting_limit() {
        let mut expression = Expression::new("f(1)");
        expression.define("f", "f($0)");
        assert_eq!(expression.evaluate(&[]),
                   Err(Error::Runtime(RuntimeError::RecursionLimit { name:  "f".to_string(),
                                                                     limit: MAX_CALL_DEPTH, })));

        let mut expression = Expression::new("ping(1) + 1");
        expression.define("ping", "pong($0) + 1");
        expression.define("pong", "ping($0)");
        assert_eq!(expression.evaluate(&[]).unwrap_err().kind(), ErrorKind::Structural);
    }

    #[test]
    fn deep_but_bounded_nesting_is_allowed() {
        let mut expression = Expression::new("d3(1)");
        expression.define("d1", "$0 + 1");
        expression.define("d2", "d1($0) * 2");
        expression.define("d3", "d2(d1($0))");
        assert_eq!(expression.evaluate(&[]), Ok(6.0));
    }

    #[test]
    fn hand_built_sequences_are_checked() {
        let expression = Expression::new("");
        expression.units.set(vec![Unit::Operand("1.2.3".to_string())]).unwrap();
        assert_eq!(expression.evaluate(&[]),
                   Err(Error::Runtime(RuntimeError::InvalidLiteral { literal: "1.2.3".to_string() })));

        let expression = Expression::new("");
        expression.units
                  .set(vec![Unit::Operand("1".to_string()),
                            Unit::Call { name:           "sum".to_string(),
                                         argument_count: 2, }])
                  .unwrap();
        assert_eq!(expression.evaluate(&[]).unwrap_err().kind(), ErrorKind::Structural);

        let expression = Expression::new("");
        expression.units
                  .set(vec![Unit::Operand("1".to_string()), Unit::Operand("2".to_string())])
                  .unwrap();
        assert!(matches!(expression.evaluate(&[]),
                         Err(Error::Runtime(RuntimeError::MalformedProgram { .. }))));
    }
}
