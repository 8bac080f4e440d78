//! Error types for fs-output.

use thiserror::Error;

/// Errors that can occur when writing run results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record flattened to different columns than the first one.
    #[error("record {record} does not match the header: expected column {expected:?}, found {found:?}")]
    ColumnMismatch {
        record:   usize,
        expected: Option<String>,
        found:    Option<String>,
    },

    #[error("no records to write")]
    EmptyBatch,
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
