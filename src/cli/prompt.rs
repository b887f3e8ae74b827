//! Interactive prompts
//!
//! Each prompt loops until the operator enters a valid value. Bad input is
//! answered with a one-line message and the prompt is shown again; only I/O
//! failures and a closed input stream are returned as errors.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money};

const INVALID_DATE: &str = "Invalid date format. Please enter in 'dd-mm-yy' format.";
const INVALID_CATEGORY: &str = "Invalid category. Please enter 'I' for income or 'E' for expenses.";
const NON_POSITIVE_AMOUNT: &str = "Amount must be greater than 0.";

/// Prompting input validator over any line source and sink
pub struct Prompter<R, W> {
    input: R,
    output: W,
    config: LedgerConfig,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter whose "today" is the local date
    pub fn new(input: R, output: W, config: LedgerConfig) -> Self {
        Self::with_today(input, output, config, Local::now().date_naive())
    }

    /// Create a prompter with a fixed "today" (useful for testing)
    pub fn with_today(input: R, output: W, config: LedgerConfig, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            config,
            today,
        }
    }

    /// The date empty input stands for
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Mutable access to the output sink
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning its input and output
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt for a date; empty input is today when `allow_default` is set
    pub fn get_date(&mut self, prompt: &str, allow_default: bool) -> LedgerResult<NaiveDate> {
        loop {
            let line = self.prompt_line(prompt)?;
            if allow_default && line.trim().is_empty() {
                return Ok(self.today);
            }
            match self.config.parse_date(&line) {
                Ok(date) => return Ok(date),
                Err(_) => self.say(INVALID_DATE)?,
            }
        }
    }

    /// Prompt for a strictly positive amount
    pub fn get_amount(&mut self, prompt: &str) -> LedgerResult<Money> {
        loop {
            let line = self.prompt_line(prompt)?;
            match Money::parse(&line) {
                Ok(amount) if amount.is_positive() => return Ok(amount),
                Ok(_) => self.say(NON_POSITIVE_AMOUNT)?,
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Prompt for a category code, `I` or `E` in any case
    pub fn get_category(&mut self, prompt: &str) -> LedgerResult<Category> {
        loop {
            let line = self.prompt_line(prompt)?;
            match Category::from_code(&line) {
                Some(category) => return Ok(category),
                None => self.say(INVALID_CATEGORY)?,
            }
        }
    }

    /// Prompt for free text, returned as typed
    pub fn get_description(&mut self, prompt: &str) -> LedgerResult<String> {
        self.prompt_line(prompt)
    }

    /// Prompt for a menu choice, trimmed
    pub fn get_choice(&mut self, prompt: &str) -> LedgerResult<String> {
        Ok(self.prompt_line(prompt)?.trim().to_string())
    }

    /// Prompt for a yes/no answer; only `y` (any case) is yes
    pub fn confirm(&mut self, prompt: &str) -> LedgerResult<bool> {
        Ok(self.prompt_line(prompt)?.trim().eq_ignore_ascii_case("y"))
    }

    /// Print a line to the output
    pub fn say(&mut self, message: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show a prompt and read one line, without its line ending
    fn prompt_line(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LedgerError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
