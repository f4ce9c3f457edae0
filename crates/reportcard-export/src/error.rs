//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is no displayed text to export.
    #[error("Please calculate the report first.")]
    NothingToExport,

    /// The PDF library rejected the document.
    #[error("Error exporting PDF: {0}")]
    Document(String),

    /// The destination could not be written.
    #[error("Error exporting PDF to {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("failed to serialize reports: {0}")]
    Json(#[from] serde_json::Error),
}
