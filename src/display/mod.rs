//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data as plain text.

pub mod report;
pub mod transaction;

pub use report::{format_range_header, format_summary};
pub use transaction::format_transaction_table;
