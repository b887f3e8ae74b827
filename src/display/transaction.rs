//! Transaction display formatting
//!
//! Renders a filtered transaction set as a table, with dates in the ledger's
//! own format.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::LedgerConfig;
use crate::models::Transaction;

/// One display row, columns named like the file header
#[derive(Tabled)]
struct TransactionRow {
    date: String,
    amount: String,
    category: &'static str,
    description: String,
}

/// Format a list of transactions as a table
///
/// An empty list yields just the header row.
pub fn format_transaction_table(transactions: &[Transaction], config: &LedgerConfig) -> String {
    let rows = transactions.iter().map(|txn| TransactionRow {
        date: config.format_date(txn.date),
        amount: txn.amount.to_string(),
        category: txn.category.as_str(),
        description: txn.description.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\n", table)
}
