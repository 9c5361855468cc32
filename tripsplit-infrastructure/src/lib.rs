#![warn(clippy::uninlined_format_args)]

pub mod in_memory_ledger;
pub mod parser;

pub use in_memory_ledger::{InMemoryLedger, LedgerWriteError};
pub use parser::TripLedgerParser;
