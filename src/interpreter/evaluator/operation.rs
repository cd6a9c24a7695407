use std::{fmt, rc::Rc};

use crate::{
    error::{Error, RuntimeError},
    interpreter::evaluator::{
        core::{EvalResult, Expression},
        scope::{Frame, Scope},
    },
};

/// Maximum nesting of sub-expression calls within one evaluation.
pub const MAX_CALL_DEPTH: usize = 128;

type UnaryFn = Rc<dyn Fn(f64) -> EvalResult<f64>>;
type BinaryFn = Rc<dyn Fn(f64, f64) -> EvalResult<f64>>;
type VariadicFn = Rc<dyn Fn(&[f64]) -> EvalResult<f64>>;

/// Anything that can be bound to a function name.
///
/// The arity is checked when a call is evaluated, not when the operation is
/// defined.
#[derive(Clone)]
pub enum Operation {
    /// Takes exactly one argument.
    Unary(UnaryFn),
    /// Takes exactly two arguments.
    Binary(BinaryFn),
    /// Takes any number of arguments.
    Variadic(VariadicFn),
    /// A sub-expression; call arguments become its positional arguments.
    Expression(Rc<Expression<'static>>),
}

impl Operation {
    /// Wraps an infallible one-argument function.
    ///
    /// # Example
    /// ```
    /// use reckon::{Expression, Operation};
    ///
    /// let mut expression = Expression::new("square(3)");
    /// expression.define("square", Operation::unary(|x| x * x));
    /// assert_eq!(expression.evaluate(&[]).unwrap(), 9.0);
    /// ```
    pub fn unary(function: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Unary(Rc::new(move |x| Ok(function(x))))
    }

    /// Wraps an infallible two-argument function.
    pub fn binary(function: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        Self::Binary(Rc::new(move |x, y| Ok(function(x, y))))
    }

    /// Wraps an infallible function over any number of arguments.
    ///
    /// # Example
    /// ```
    /// use reckon::{Expression, Operation};
    ///
    /// let mut expression = Expression::new("count(e, pi, 1)");
    /// expression.define("count", Operation::variadic(|args| args.len() as f64));
    /// assert_eq!(expression.evaluate(&[]).unwrap(), 3.0);
    /// ```
    pub fn variadic(function: impl Fn(&[f64]) -> f64 + 'static) -> Self {
        Self::Variadic(Rc::new(move |args| Ok(function(args))))
    }

    /// Wraps a one-argument function that may reject its input.
    pub fn checked_unary(function: impl Fn(f64) -> EvalResult<f64> + 'static) -> Self {
        Self::Unary(Rc::new(function))
    }

    /// Wraps a variadic function that may reject its input.
    pub fn checked_variadic(function: impl Fn(&[f64]) -> EvalResult<f64> + 'static) -> Self {
        Self::Variadic(Rc::new(function))
    }

    /// A sub-expression given as source text. It is analyzed on its first call.
    pub fn expression(source: impl Into<String>) -> Self {
        Self::Expression(Rc::new(Expression::nested(source)))
    }

    /// Invokes the operation on `arguments`.
    ///
    /// `name` is the name the call used and only serves error reporting.
    /// `owner` is the scope that binds the operation; a sub-expression uses it
    /// as its parent. `depth` is the number of sub-expression calls already
    /// enclosing the call site.
    pub(crate) fn invoke(&self,
                         name: &str,
                         arguments: &[f64],
                         owner: &dyn Scope,
                         depth: usize)
                         -> Result<f64, Error> {
        match self {
            Self::Unary(function) => {
                let &[x] = arguments else {
                    return Err(arity_mismatch(name, 1, arguments).into());
                };
                Ok(function(x)?)
            },
            Self::Binary(function) => {
                let &[x, y] = arguments else {
                    return Err(arity_mismatch(name, 2, arguments).into());
                };
                Ok(function(x, y)?)
            },
            Self::Variadic(function) => Ok(function(arguments)?),
            Self::Expression(expression) => {
                if depth >= MAX_CALL_DEPTH {
                    return Err(RuntimeError::RecursionLimit { name:  name.to_string(),
                                                              limit: MAX_CALL_DEPTH, }.into());
                }
                tracing::trace!(name, depth, arguments = arguments.len(), "calling sub-expression");
                let frame = Frame::new(expression.bindings(), owner);
                expression.evaluate_in(&frame, arguments, depth + 1)
            },
        }
    }
}

fn arity_mismatch(name: &str, expected: usize, arguments: &[f64]) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                          expected,
                                          found: arguments.len() }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(_) => f.write_str("Unary"),
            Self::Binary(_) => f.write_str("Binary"),
            Self::Variadic(_) => f.write_str("Variadic"),
            Self::Expression(expression) => f.debug_tuple("Expression").field(&expression.source()).finish(),
        }
    }
}

/// Anything that can be passed to [`Expression::define`].
#[derive(Debug, Clone)]
pub enum Definition {
    /// A constant, bound as a value.
    Value(f64),
    /// A function, bound as an operation.
    Operation(Operation),
}

impl From<f64> for Definition {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<Operation> for Definition {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

impl From<&str> for Definition {
    fn from(source: &str) -> Self {
        Self::Operation(Operation::expression(source))
    }
}

impl From<String> for Definition {
    fn from(source: String) -> Self {
        Self::Operation(Operation::expression(source))
    }
}
