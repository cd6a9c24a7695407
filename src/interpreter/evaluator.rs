/// Core evaluation logic.
///
/// Contains the [`Expression`](core::Expression) type: its scope, its cached
/// unit sequence and the stack machine that runs it.
pub mod core;

/// Function evaluation.
///
/// Built-in operations and constants available in every root scope.
pub mod function;

/// Operation bindings.
///
/// The tagged variant bound to function names (unary, binary, variadic or
/// sub-expression) and its arity-checked dispatch.
pub mod operation;

/// Scope chains.
///
/// Name lookup through local bindings and non-owning parent references.
pub mod scope;
