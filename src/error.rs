//! Error types for the urban_pulse crate

use thiserror::Error;

/// Custom error types for the urban_pulse crate
#[derive(Debug, Error)]
pub enum PulseError {
    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to series data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV export
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, PulseError>;

impl From<csv::Error> for PulseError {
    fn from(err: csv::Error) -> Self {
        PulseError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::JsonError(err.to_string())
    }
}
