//! Configuration module for the ledger
//!
//! The ledger reads no config file and no environment variables; every
//! setting lives in [`LedgerConfig`] and is filled from command-line flags.

pub mod settings;

pub use settings::LedgerConfig;
