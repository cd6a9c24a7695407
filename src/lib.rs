//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It tokenizes, analyzes, and evaluates expressions with support for
//! implicit multiplication, variadic functions, positional arguments, and
//! user-defined values, functions and sub-expressions resolved through scope
//! chains.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

/// Provides unified error types for analysis and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// analyzing or evaluating an expression, and the [`ErrorKind`](error::ErrorKind)
/// categories callers match on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, analyzer, evaluator).
/// - Attaches source positions and names to errors for context.
/// - Keeps the category of errors raised inside nested sub-expressions.
pub mod error;
/// Orchestrates the three evaluation stages.
///
/// This module ties together the lexer, the analyzer and the evaluator, and
/// exposes the scope and binding API used to evaluate expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, analyzer and evaluator.
/// - Provides entry points for analyzing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the analyzed form of an expression.
///
/// This module declares the [`Unit`](unit::Unit) enum: the postfix instructions
/// the analyzer produces and the evaluator runs.
pub mod unit;
/// Batch evaluation of JSON documents.
///
/// Loads a document of shared definitions and expressions, binds the
/// definitions through the regular binding API and evaluates every
/// expression, reporting each outcome separately.
pub mod batch;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `u64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::evaluator::{
        core::Expression,
        operation::{Definition, Operation},
        scope::Scope,
    },
};

/// Evaluates `source` in a fresh root scope with the given positional
/// arguments.
///
/// # Errors
/// Returns an error if tokenizing, analysis or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("6/2(1+2)", &[]).unwrap(), 1.0);
/// assert_eq!(evaluate("$0 + $1", &[1.0, 2.0]).unwrap(), 3.0);
///
/// // 'x' is not defined
/// let err = evaluate("x + 1", &[]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownName);
/// ```
pub fn evaluate(source: &str, arguments: &[f64]) -> Result<f64, Error> {
    Expression::new(source).evaluate(arguments)
}
