//! Terminal setup and teardown
//!
//! This module handles entering and leaving the alternate screen for the
//! chart view, including a panic hook that restores the terminal on crash.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::DailySeries;

use super::chart::IncomeExpenseChart;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Something that can show a daily series to the operator
pub trait ChartPresenter {
    fn present(&mut self, series: &DailySeries, config: &LedgerConfig) -> LedgerResult<()>;
}

/// Shows the chart full-screen until a key is pressed
#[derive(Debug, Default)]
pub struct TerminalChart;

impl ChartPresenter for TerminalChart {
    fn present(&mut self, series: &DailySeries, config: &LedgerConfig) -> LedgerResult<()> {
        show_chart(series, config)
    }
}

/// Initialize the terminal for the chart view
pub fn init_terminal() -> LedgerResult<Tui> {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            // Restore terminal before printing panic info
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    enter_alternate_screen(&mut stdout)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error)
}

/// Switch to the alternate screen, leaving raw mode if that fails
fn enter_alternate_screen<W: Write>(out: &mut W) -> LedgerResult<()> {
    if let Err(err) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(tui_error(err));
    }
    Ok(())
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> LedgerResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

/// Draw the chart and block until the operator presses a key
pub fn show_chart(series: &DailySeries, config: &LedgerConfig) -> LedgerResult<()> {
    let chart = IncomeExpenseChart::new(series, config);
    let mut terminal = init_terminal()?;

    let result = event_loop(&mut terminal, &chart);

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, chart: &IncomeExpenseChart) -> LedgerResult<()> {
    loop {
        terminal
            .draw(|frame| chart.render(frame, frame.area()))
            .map_err(tui_error)?;

        // Resize just falls through to a redraw
        if let Event::Key(key) = event::read().map_err(tui_error)? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn tui_error(err: io::Error) -> LedgerError {
    LedgerError::Tui(err.to_string())
}
