//! Storage layer for the ledger
//!
//! Provides the append-only CSV table and the helpers that create, append to
//! and read it.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use init::{initialize_ledger, COLUMNS};
pub use ledger::Ledger;
