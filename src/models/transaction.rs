//! Transaction model
//!
//! A single dated income or expense entry. Transactions are immutable once
//! written to the ledger.

use chrono::NaiveDate;

use super::category::Category;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date, no time of day
    pub date: NaiveDate,

    /// Always strictly positive; the category carries the direction
    pub amount: Money,

    pub category: Category,

    /// Free text, may be empty
    pub description: String,
}

impl Transaction {
    /// Create a new transaction, rejecting non-positive amounts
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "Amount must be greater than 0.".to_string(),
            ));
        }

        Ok(Self {
            date,
            amount,
            category,
            description: description.into(),
        })
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.category == Category::Expenses
    }

    /// Check if the transaction falls within an inclusive date range
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}
