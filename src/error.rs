//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A stored row could not be read back
    #[error("Corrupt ledger file at line {line}: {message}")]
    Corrupt { line: u64, message: String },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date range whose start falls after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The operator's input stream ended while a prompt was waiting
    #[error("Input closed before a value was entered")]
    InputClosed,

    /// Terminal/chart errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create a corrupt-row error
    pub fn corrupt(line: u64, message: impl Into<String>) -> Self {
        Self::Corrupt {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors the menu reports and then continues from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRange { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(_) = err.kind() {
            return Self::Io(err.to_string());
        }
        let line = err.position().map(|p| p.line());
        match line {
            Some(line) => Self::corrupt(line, err.to_string()),
            None => Self::Csv(err.to_string()),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
