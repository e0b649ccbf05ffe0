//! Custom error types for expense-ledger
//!
//! Application-level failures (configuration, file I/O, ledger writes) are
//! modelled here with thiserror. Per-line parse failures are not errors in
//! this sense; they live in [`crate::parser::ParseError`] and are reported
//! alongside the records that did parse.

use thiserror::Error;

/// The main error type for expense-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV ledger read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Ledger sink errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Problems acquiring the raw entry text
    #[error("Input error: {0}")]
    Input(String),
}

impl LedgerError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Csv(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
