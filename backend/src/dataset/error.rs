//! Error types for dataset loading.
//!
//! Every variant is fatal: the dataset is loaded once at startup and a failed
//! load aborts the process.

use std::path::PathBuf;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error type for dataset loading
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The CSV file could not be opened.
    #[error("Failed to open dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (unbalanced quotes, ragged rows, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing column '{column}' in CSV header")]
    MissingColumn { column: String },

    /// The date cell could not be parsed as a calendar date.
    #[error("Invalid date '{value}' on line {line}")]
    InvalidDate { value: String, line: u64 },

    /// A metric cell could not be parsed as a number.
    #[error("Invalid number '{value}' in column '{column}' on line {line}")]
    InvalidNumber {
        value: String,
        column: String,
        line: u64,
    },
}
