//! Error types for the suggest-fix library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for suggest-fix operations.
///
/// Fixing a suggestion never fails; these errors only come from building a
/// registry or loading configuration.
#[derive(Debug, Error)]
pub enum FixError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two fix rules were registered under the same rule id.
    #[error("Duplicate fix rule registered for '{rule_id}'")]
    DuplicateRule { rule_id: String },
}

/// Result type alias for suggest-fix operations.
pub type Result<T> = std::result::Result<T, FixError>;
