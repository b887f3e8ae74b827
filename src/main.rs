use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use finance_ledger::cli::{Prompter, Session};
use finance_ledger::config::{settings::DEFAULT_FILE, LedgerConfig};
use finance_ledger::storage::Ledger;
use finance_ledger::tui::TerminalChart;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "Records income and expense transactions to a CSV file, \
                  shows totals for a date range and charts daily activity. \
                  Everything happens through an interactive menu."
)]
struct Cli {
    /// Ledger CSV file
    #[arg(short, long, default_value = DEFAULT_FILE)]
    file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let ledger = Ledger::new(LedgerConfig::with_file(cli.file));

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), ledger.config().clone());
    let mut session = Session::new(&ledger, prompter, TerminalChart);
    session.run()?;

    Ok(())
}
