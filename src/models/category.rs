//! Transaction category
//!
//! The ledger knows exactly two categories. Operators pick one with a single
//! letter; the file stores the full name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Income or expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expenses,
}

impl Category {
    /// All categories, in chart/legend order
    pub const ALL: [Category; 2] = [Category::Income, Category::Expenses];

    /// Map an operator code (`I` or `E`, any case) to a category
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "I" => Some(Self::Income),
            "E" => Some(Self::Expenses),
            _ => None,
        }
    }

    /// The persisted literal
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expenses" => Ok(Self::Expenses),
            other => Err(LedgerError::Validation(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}
