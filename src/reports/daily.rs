//! Daily income/expense series
//!
//! Buckets transactions into one value per calendar day and category, over
//! every day of the queried range. Days without activity hold zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Category, Money, Transaction};

use super::summary::out_of_range;

/// Two zero-filled daily series sharing one date axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    /// Every calendar day from start to end, ascending
    pub axis: Vec<NaiveDate>,
    /// Income total per axis day
    pub income: Vec<Money>,
    /// Expenses total per axis day
    pub expenses: Vec<Money>,
}

impl DailySeries {
    /// Resample transactions onto the daily axis `[start, end]`
    ///
    /// Transactions outside the range are ignored. An inverted range yields
    /// empty series.
    pub fn resample(
        transactions: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
    ) -> LedgerResult<Self> {
        let axis: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();

        let income = bucket(transactions, Category::Income, &axis)?;
        let expenses = bucket(transactions, Category::Expenses, &axis)?;

        Ok(Self {
            axis,
            income,
            expenses,
        })
    }

    /// Number of days on the axis
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    /// Check if the axis has no days
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    /// Series for one category
    pub fn series(&self, category: Category) -> &[Money] {
        match category {
            Category::Income => &self.income,
            Category::Expenses => &self.expenses,
        }
    }

    /// First and last day of the axis
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.axis.first()?, *self.axis.last()?))
    }

    /// Largest single-day amount across both series
    pub fn peak(&self) -> Money {
        self.income
            .iter()
            .chain(self.expenses.iter())
            .copied()
            .max()
            .unwrap_or_default()
    }

    /// `(day index, amount)` pairs for plotting
    pub fn points(&self, category: Category) -> Vec<(f64, f64)> {
        self.series(category)
            .iter()
            .enumerate()
            .map(|(i, amount)| (i as f64, amount.as_f64()))
            .collect()
    }
}

/// Sum one category per day, then reindex onto the axis with zero fill
fn bucket(
    transactions: &[Transaction],
    category: Category,
    axis: &[NaiveDate],
) -> LedgerResult<Vec<Money>> {
    let mut per_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.category == category) {
        let day = per_day.entry(txn.date).or_default();
        *day = day
            .checked_add(txn.amount)
            .ok_or_else(|| out_of_range(category.as_str()))?;
    }

    Ok(axis
        .iter()
        .map(|day| per_day.get(day).copied().unwrap_or_default())
        .collect())
}
