//! Reports module
//!
//! Aggregations over a queried date range:
//!
//! - `Summary`: income, expense and net totals
//! - `DailySeries`: per-day income and expense amounts for charting

pub mod daily;
pub mod summary;

pub use daily::DailySeries;
pub use summary::Summary;
