use std::path::PathBuf;

/// The batch document model and its mapping onto the binding API.
pub mod document;
/// Evaluation of a whole document with per-entry outcomes.
pub mod runner;

/// Errors that invalidate a whole batch document.
///
/// Errors of individual expressions are not batch errors; they are recorded in
/// each [`Outcome`](runner::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },
    #[error("invalid batch document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("definition '{name}' has neither a value nor a function")]
    InvalidDefinition { name: String },
}
