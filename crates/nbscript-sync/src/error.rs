//! Error types for notebook conversion.

use std::path::PathBuf;

/// Result type for conversion operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while converting a notebook.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The notebook path does not exist.
    #[error("Notebook not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read source file.
    #[error("Failed to read file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// Failed to write output file.
    #[error("Failed to write file {path}: {message}")]
    WriteError { path: PathBuf, message: String },

    /// Notebook content is not valid JSON or has an unexpected shape.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// JSON is well formed but not shaped like a notebook.
    #[error("Invalid notebook: {0}")]
    InvalidNotebook(String),
}
