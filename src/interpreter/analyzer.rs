/// Core analysis logic.
///
/// The entry point [`analyze`](core::analyze) and the [`Analyzer`](core::Analyzer)
/// state machine.
pub mod core;

/// Pending operations.
///
/// Priorities and the operator table used while resolving precedence.
pub mod operation;
