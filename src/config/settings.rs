//! Ledger configuration
//!
//! Holds the location of the backing file and the fixed date format used
//! both on disk and at the prompts.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::LedgerError;

/// Default ledger file, relative to the working directory
pub const DEFAULT_FILE: &str = "finance_data.csv";

/// Day-month-two-digit-year, e.g. `01-03-24`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%y";

/// Configuration handed to the [`Ledger`](crate::storage::Ledger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Path to the CSV table
    pub file: PathBuf,

    /// strftime format for stored and entered dates
    pub date_format: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Create a configuration for a specific ledger file (useful for testing)
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Get the ledger file path
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Parse a date in the configured format
    pub fn parse_date(&self, s: &str) -> Result<NaiveDate, LedgerError> {
        NaiveDate::parse_from_str(s.trim(), &self.date_format).map_err(|e| {
            LedgerError::Validation(format!("'{}' is not a valid date: {}", s.trim(), e))
        })
    }

    /// Render a date in the configured format
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}
