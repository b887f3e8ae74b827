//! Range summary
//!
//! Income, expense and net totals for a set of transactions.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Transaction};

/// Aggregate totals over a filtered transaction set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all Income amounts
    pub total_income: Money,
    /// Sum of all Expenses amounts
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_savings: Money,
}

impl Summary {
    /// Sum a slice of transactions by category
    ///
    /// Fails with a validation error if any total leaves the representable
    /// range.
    pub fn from_transactions(transactions: &[Transaction]) -> LedgerResult<Self> {
        let total_for = |category: Category| -> LedgerResult<Money> {
            Money::checked_sum(
                transactions
                    .iter()
                    .filter(|t| t.category == category)
                    .map(|t| t.amount),
            )
            .ok_or_else(|| out_of_range(category.as_str()))
        };

        let total_income = total_for(Category::Income)?;
        let total_expenses = total_for(Category::Expenses)?;
        let net_savings = total_income
            .checked_sub(total_expenses)
            .ok_or_else(|| out_of_range("Net savings"))?;

        Ok(Self {
            total_income,
            total_expenses,
            net_savings,
        })
    }
}

pub(crate) fn out_of_range(what: &str) -> LedgerError {
    LedgerError::Validation(format!("{} total is too large to compute", what))
}
