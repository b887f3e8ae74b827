//! finance-ledger - Terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the `ledger` binary: it
//! records income and expense transactions to a CSV file, queries them by
//! date range, summarizes totals, and charts daily activity.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger file location and date format
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money)
//! - `storage`: Append-only CSV storage layer
//! - `reports`: Range totals and daily resampling
//! - `display`: Plain-text tables and summaries
//! - `tui`: Line chart rendered with ratatui
//! - `cli`: Validating prompts and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::config::LedgerConfig;
//! use finance_ledger::storage::Ledger;
//!
//! let ledger = Ledger::new(LedgerConfig::with_file("finance_data.csv"));
//! ledger.initialize()?;
//! let march = ledger.get_transactions(start, end)?;
//! let summary = Ledger::summarize(&march)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::LedgerError;
