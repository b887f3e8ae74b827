//! Interactive menu loop
//!
//! Ties the prompts, the ledger and the chart together:
//! add a transaction, view a date range, or exit.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::display::{format_range_header, format_summary, format_transaction_table};
use crate::error::LedgerResult;
use crate::reports::{DailySeries, Summary};
use crate::storage::Ledger;
use crate::tui::ChartPresenter;

use super::prompt::Prompter;

/// A single choice from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu input
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One operator session over a ledger
pub struct Session<'a, R, W, P> {
    ledger: &'a Ledger,
    prompter: Prompter<R, W>,
    presenter: P,
}

impl<'a, R, W, P> Session<'a, R, W, P>
where
    R: BufRead,
    W: Write,
    P: ChartPresenter,
{
    /// Create a session
    pub fn new(ledger: &'a Ledger, prompter: Prompter<R, W>, presenter: P) -> Self {
        Self {
            ledger,
            prompter,
            presenter,
        }
    }

    /// Consume the session, returning its prompter and presenter
    pub fn into_parts(self) -> (Prompter<R, W>, P) {
        (self.prompter, self.presenter)
    }

    /// Run the menu until the operator exits
    ///
    /// Recoverable errors are reported and the menu shown again; anything
    /// else ends the session.
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.prompter.say("")?;
            self.prompter.say("1. Add a new transaction")?;
            self.prompter
                .say("2. View transactions and summary within a date range")?;
            self.prompter.say("3. Exit")?;
            let choice = self.prompter.get_choice("Enter your choice (1-3): ")?;

            let result = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add(),
                Some(MenuChoice::View) => self.view(),
                Some(MenuChoice::Exit) => {
                    self.prompter.say("Exiting...")?;
                    return Ok(());
                }
                None => {
                    debug!(choice = %choice, "unrecognized menu choice");
                    self.prompter.say("Invalid choice. Enter 1, 2, or 3.")?;
                    Ok(())
                }
            };

            match result {
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "operation rejected");
                    self.prompter.say(&e.to_string())?;
                }
                other => other?,
            }
        }
    }

    /// Collect a transaction from the operator and append it
    pub fn add(&mut self) -> LedgerResult<()> {
        self.ledger.initialize()?;

        let date = self.prompter.get_date(
            "Enter the date of the transaction (dd-mm-yy) or press Enter for today's date: ",
            true,
        )?;
        let amount = self.prompter.get_amount("Enter the amount: ")?;
        let category = self
            .prompter
            .get_category("Enter the category ('I' for Income or 'E' for Expenses): ")?;
        let description = self.prompter.get_description("Enter a description: ")?;

        self.ledger.add_entry(date, amount, category, &description)?;
        self.prompter.say("Entry added successfully")
    }

    /// Query a date range, print it, and optionally chart it
    pub fn view(&mut self) -> LedgerResult<()> {
        self.ledger.initialize()?;

        let start = self
            .prompter
            .get_date("Enter the start date (dd-mm-yy): ", false)?;
        let end = self
            .prompter
            .get_date("Enter the end date (dd-mm-yy) or press Enter for today's date: ", true)?;

        let ledger = self.ledger;
        let transactions = ledger.get_transactions(start, end)?;
        let config = ledger.config();

        if transactions.is_empty() {
            self.prompter
                .say("No transactions found in the given date range.")?;
        } else {
            let summary = Summary::from_transactions(&transactions)?;

            self.prompter.say("")?;
            self.prompter.say(&format_range_header(start, end, config))?;
            let table = format_transaction_table(&transactions, config);
            write!(self.prompter.output(), "{}", table)?;

            self.prompter.say("")?;
            write!(self.prompter.output(), "{}", format_summary(&summary))?;
        }

        if self.prompter.confirm("Do you want to see a plot? (y/n): ")? {
            let series = DailySeries::resample(&transactions, start, end)?;
            self.presenter.present(&series, config)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::error::LedgerError;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Records every series it is asked to show
    #[derive(Default)]
    struct RecordingPresenter {
        shown: Vec<DailySeries>,
    }

    impl ChartPresenter for RecordingPresenter {
        fn present(&mut self, series: &DailySeries, _config: &LedgerConfig) -> LedgerResult<()> {
            self.shown.push(series.clone());
            Ok(())
        }
    }

    struct Outcome {
        result: LedgerResult<()>,
        output: String,
        shown: Vec<DailySeries>,
    }

    fn run_session(ledger: &Ledger, input: &str) -> Outcome {
        let prompter = Prompter::with_today(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            ledger.config().clone(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );
        let mut session = Session::new(ledger, prompter, RecordingPresenter::default());
        let result = session.run();
        let (prompter, presenter) = session.into_parts();
        let (_, output) = prompter.into_inner();

        Outcome {
            result,
            output: String::from_utf8(output).unwrap(),
            shown: presenter.shown,
        }
    }

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(LedgerConfig::with_file(
            temp_dir.path().join("finance_data.csv"),
        ));
        (temp_dir, ledger)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::View));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "3\n");

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Exiting..."));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "9\n3\n");

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Invalid choice. Enter 1, 2, or 3."));
        assert_eq!(outcome.output.matches("1. Add a new transaction").count(), 2);
    }

    #[test]
    fn test_add_with_default_date() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "1\n\n-5\n20\ne\ncoffee\n3\n");

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Amount must be greater than 0."));
        assert!(outcome.output.contains("Entry added successfully"));

        let all = ledger.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(all[0].amount, Money::from_cents(2000));
        assert_eq!(all[0].category, Category::Expenses);
        assert_eq!(all[0].description, "coffee");
    }

    #[test]
    fn test_add_rejects_sub_cent_amount() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "1\n01-03-24\n0.001\n1.999\n1.99\nI\ntip\n3\n");

        assert!(outcome.result.is_ok());
        assert_eq!(
            outcome
                .output
                .matches("Amount can have at most two decimal places.")
                .count(),
            2
        );
        assert!(!outcome.output.contains("Amount must be greater than 0."));

        let all = ledger.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount, Money::from_cents(199));
    }

    #[test]
    fn test_overflowing_totals_return_to_menu() {
        let (_temp_dir, ledger) = create_test_ledger();
        let input = "1\n01-03-24\n90000000000000000\nI\na\n\
                     1\n01-03-24\n90000000000000000\nI\nb\n\
                     2\n01-03-24\n01-03-24\n\
                     3\n";
        let outcome = run_session(&ledger, input);

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Income total is too large to compute"));
        assert!(!outcome.output.contains("Transactions from"));
        assert!(outcome.output.contains("Exiting..."));
    }

    #[test]
    fn test_view_scenario_with_plot() {
        let (_temp_dir, ledger) = create_test_ledger();
        let input = "1\n01-03-24\n100\nI\nsalary\n\
                     1\n01-03-24\n30\nE\nlunch\n\
                     2\n01-03-24\n01-03-24\ny\n\
                     3\n";
        let outcome = run_session(&ledger, input);

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Transactions from 01-03-24 to 01-03-24:"));
        assert!(outcome.output.contains("salary"));
        assert!(outcome.output.contains("lunch"));
        assert!(outcome.output.contains("Total Income: 100.00"));
        assert!(outcome.output.contains("Total Expenses: 30.00"));
        assert!(outcome.output.contains("Net Savings: 70.00"));

        assert_eq!(outcome.shown.len(), 1);
        let series = &outcome.shown[0];
        assert_eq!(series.len(), 1);
        assert_eq!(series.income, vec![Money::from_cents(10000)]);
        assert_eq!(series.expenses, vec![Money::from_cents(3000)]);
    }

    #[test]
    fn test_view_empty_range() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "2\n01-01-23\n31-01-23\nn\n3\n");

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("No transactions found"));
        assert!(!outcome.output.contains("Total Income"));
        assert!(outcome.shown.is_empty());
    }

    #[test]
    fn test_empty_range_plot_is_all_zero() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "2\n01-01-23\n03-01-23\ny\n3\n");

        assert_eq!(outcome.shown.len(), 1);
        assert_eq!(outcome.shown[0].len(), 3);
        assert!(outcome.shown[0].income.iter().all(Money::is_zero));
        assert!(outcome.shown[0].expenses.iter().all(Money::is_zero));
    }

    #[test]
    fn test_reversed_range_returns_to_menu() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "2\n05-03-24\n01-03-24\n3\n");

        assert!(outcome.result.is_ok());
        assert!(outcome.output.contains("Invalid date range"));
        assert!(outcome.output.contains("Exiting..."));
    }

    #[test]
    fn test_end_date_defaults_to_today() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(
            &ledger,
            "1\n10-03-24\n5\nI\ngift\n2\n01-03-24\n\nn\n3\n",
        );

        assert!(outcome.output.contains("Transactions from 01-03-24 to 10-03-24:"));
        assert!(outcome.output.contains("gift"));
    }

    #[test]
    fn test_corrupt_file_ends_session() {
        let (_temp_dir, ledger) = create_test_ledger();
        std::fs::write(
            ledger.config().file(),
            "date,amount,category,description\nnot-a-date,1,Income,\n",
        )
        .unwrap();

        let outcome = run_session(&ledger, "2\n01-03-24\n31-03-24\n3\n");
        assert!(matches!(
            outcome.result,
            Err(LedgerError::Corrupt { line: 2, .. })
        ));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (_temp_dir, ledger) = create_test_ledger();
        let outcome = run_session(&ledger, "1\n");

        assert!(matches!(outcome.result, Err(LedgerError::InputClosed)));
    }
}
