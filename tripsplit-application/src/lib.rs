#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod summary_processor;

pub use error::{LedgerParseError, SummaryError};
pub use model::{TripLedger, TripRecord, TripSummary};
pub use ports::{LedgerParser, LedgerSource, PersonDirectory};
pub use summary_processor::SummaryProcessor;
