//! Interactive command-line front end
//!
//! This module contains the prompts that validate operator input and the
//! menu loop that drives the ledger.

pub mod menu;
pub mod prompt;

pub use menu::{MenuChoice, Session};
pub use prompt::Prompter;
