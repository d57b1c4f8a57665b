//! Graph export error types.

use std::io;

use thiserror::Error;

/// Errors that can occur while exporting a machine graph
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing to the output sink failed
    #[error("Failed to write graph output: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),
}
