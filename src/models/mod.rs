//! Core data models for the ledger
//!
//! A ledger holds nothing but transactions; each one carries an amount, a
//! category and a date.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
