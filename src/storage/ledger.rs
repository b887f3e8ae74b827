//! Ledger repository for CSV storage
//!
//! Appends transactions to the ledger table and reads them back. Every read
//! reloads the whole file, so results always reflect what is on disk.

use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Transaction};
use crate::reports::Summary;

use super::file_io::{append_row, read_records};
use super::init::{initialize_ledger, COLUMNS};

/// One row of the ledger table as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerRow {
    date: String,
    amount: Money,
    category: Category,
    description: String,
}

/// Repository for the append-only transaction table
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger over the configured file
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Ensure the backing file exists with its header
    pub fn initialize(&self) -> LedgerResult<()> {
        initialize_ledger(&self.config)
    }

    /// Append a transaction to the table
    ///
    /// Prior rows are neither read nor validated.
    pub fn add_entry(
        &self,
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: &str,
    ) -> LedgerResult<Transaction> {
        let txn = Transaction::new(date, amount, category, description)?;
        self.append(&txn)?;
        Ok(txn)
    }

    /// Append an already-validated transaction
    pub fn append(&self, txn: &Transaction) -> LedgerResult<()> {
        self.initialize()?;

        let row = LedgerRow {
            date: self.config.format_date(txn.date),
            amount: txn.amount,
            category: txn.category,
            description: txn.description.clone(),
        };
        append_row(self.config.file(), &row)?;

        info!(
            date = %row.date,
            amount = %row.amount,
            category = %row.category,
            "appended transaction"
        );
        Ok(())
    }

    /// Load every persisted transaction in file order
    ///
    /// Any unreadable row fails the whole load.
    pub fn all(&self) -> LedgerResult<Vec<Transaction>> {
        let (headers, records) = read_records(self.config.file())?;

        if headers.iter().ne(COLUMNS.iter().copied()) {
            return Err(LedgerError::corrupt(
                1,
                format!(
                    "expected header '{}', found '{}'",
                    COLUMNS.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        records
            .iter()
            .map(|(line, record)| self.parse_row(*line, record, &headers))
            .collect()
    }

    /// Load the transactions dated within `[start, end]`, both ends inclusive
    ///
    /// File order is preserved. A start date after the end date is rejected.
    pub fn get_transactions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> LedgerResult<Vec<Transaction>> {
        if start > end {
            return Err(LedgerError::InvalidRange { start, end });
        }

        let all = self.all()?;
        let total = all.len();
        let filtered: Vec<_> = all
            .into_iter()
            .filter(|t| t.is_within(start, end))
            .collect();

        debug!(
            start = %start,
            end = %end,
            matched = filtered.len(),
            total,
            "filtered ledger"
        );
        Ok(filtered)
    }

    /// Income, expense and net totals over a set of transactions
    pub fn summarize(transactions: &[Transaction]) -> LedgerResult<Summary> {
        Summary::from_transactions(transactions)
    }

    fn parse_row(
        &self,
        line: u64,
        record: &StringRecord,
        headers: &StringRecord,
    ) -> LedgerResult<Transaction> {
        let row: LedgerRow = record
            .deserialize(Some(headers))
            .map_err(|e| LedgerError::corrupt(line, e.to_string()))?;

        let date = self
            .config
            .parse_date(&row.date)
            .map_err(|_| LedgerError::corrupt(line, format!("bad date '{}'", row.date)))?;

        Transaction::new(date, row.amount, row.category, row.description)
            .map_err(|e| LedgerError::corrupt(line, e.to_string()))
    }
}
