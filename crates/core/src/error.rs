//! Error types for the market-insights pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the market-insights pipeline.
///
/// Only structurally unusable input is an error. Missing values, short
/// series, and rolling-window warm-up are valid states and surface as
/// `None` fields downstream, never as variants here.
#[derive(Error, Debug)]
pub enum Error {
    /// No input source satisfied the required-column contract.
    /// Fatal: the pipeline has nothing to process.
    #[error("No valid input: {0}")]
    NoValidInput(String),

    /// Data error (malformed source structure).
    #[error("Data error: {0}")]
    Data(String),

    /// Export error (failed to write an output table).
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a no-valid-input error.
    pub fn no_valid_input(msg: impl Into<String>) -> Self {
        Error::NoValidInput(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Error::Export(msg.into())
    }
}
