//! Ledger file initialization
//!
//! Handles first-run creation of the header-only table

use tracing::info;

use crate::config::LedgerConfig;
use crate::error::LedgerError;

use super::file_io::{is_missing_or_empty, write_header};

/// Column schema of the ledger table, in file order
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Ensure the ledger file exists with its header row
///
/// A missing or zero-length file is replaced by a header-only table. An
/// existing non-empty file is left untouched.
pub fn initialize_ledger(config: &LedgerConfig) -> Result<(), LedgerError> {
    if needs_initialization(config)? {
        write_header(config.file(), &COLUMNS)?;
        info!(file = %config.file().display(), "created empty ledger");
    }

    Ok(())
}

/// Check if the ledger file still needs to be created
pub fn needs_initialization(config: &LedgerConfig) -> Result<bool, LedgerError> {
    is_missing_or_empty(config.file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_file(temp_dir.path().join("finance_data.csv"));

        assert!(needs_initialization(&config).unwrap());

        initialize_ledger(&config).unwrap();

        assert!(!needs_initialization(&config).unwrap());
        assert_eq!(
            fs::read_to_string(config.file()).unwrap(),
            "date,amount,category,description\n"
        );
    }

    #[test]
    fn test_initialize_twice_is_identical() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_file(temp_dir.path().join("finance_data.csv"));

        initialize_ledger(&config).unwrap();
        let once = fs::read(config.file()).unwrap();

        initialize_ledger(&config).unwrap();
        let twice = fs::read(config.file()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_file_gets_header() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_file(temp_dir.path().join("finance_data.csv"));
        fs::write(config.file(), "").unwrap();

        initialize_ledger(&config).unwrap();

        assert!(fs::read_to_string(config.file())
            .unwrap()
            .starts_with("date,amount,category,description"));
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::with_file(temp_dir.path().join("finance_data.csv"));
        let existing = "date,amount,category,description\n01-03-24,100.00,Income,salary\n";
        fs::write(config.file(), existing).unwrap();

        initialize_ledger(&config).unwrap();

        assert_eq!(fs::read_to_string(config.file()).unwrap(), existing);
    }
}
