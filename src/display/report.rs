//! Report formatting utilities for terminal output

use chrono::NaiveDate;

use crate::config::LedgerConfig;
use crate::reports::Summary;

/// Heading printed above a range's transaction table
pub fn format_range_header(start: NaiveDate, end: NaiveDate, config: &LedgerConfig) -> String {
    format!(
        "Transactions from {} to {}:",
        config.format_date(start),
        config.format_date(end)
    )
}

/// Format the three summary lines, two decimals each
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    output.push_str("Summary:\n");
    output.push_str(&format!("Total Income: {}\n", summary.total_income));
    output.push_str(&format!("Total Expenses: {}\n", summary.total_expenses));
    output.push_str(&format!("Net Savings: {}\n", summary.net_savings));
    output
}
