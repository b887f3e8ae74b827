//! Terminal chart view
//!
//! Renders the income/expense chart with ratatui on a crossterm backend.

pub mod chart;
pub mod terminal;

pub use chart::IncomeExpenseChart;
pub use terminal::{show_chart, ChartPresenter, TerminalChart};
