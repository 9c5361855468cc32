#![warn(clippy::uninlined_format_args)]

pub mod balance;
pub mod error;
pub mod model;
pub mod services;

pub use balance::BalanceSheet;
pub use error::{AmountDefect, IntegrityViolation, LedgerError};
pub use model::{
    AggregatedPair, CURRENCY_SCALE, Currency, LedgerEntry, MAX_PAYMENT, MIN_PAYMENT, Money,
    NetSettlement, PairKey, Payment, PersonId, RawDebtEntry, Trip, TripId,
};
pub use services::{Aggregator, DebtGenerator, SettlementConsolidator};
