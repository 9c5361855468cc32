use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::model::{Money, PersonId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Data integrity violation: {0}")]
    DataIntegrity(#[from] IntegrityViolation),
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: Money, reason: AmountDefect },
    #[error("Trip '{title}' ends on {end} before it starts on {start}")]
    InvalidTrip {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Broken uniqueness or identity assumptions between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("duplicate total for {debitor} -> {payer}")]
    DuplicatePair { debitor: PersonId, payer: PersonId },
    #[error("{person} is recorded as owing themself")]
    SelfPair { person: PersonId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountDefect {
    NotPositive,
    BelowMinimum,
    ExcessPrecision,
    TooLarge,
}

impl fmt::Display for AmountDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NotPositive => "amount must be greater than zero",
            Self::BelowMinimum => "amount must be at least 0.01",
            Self::ExcessPrecision => "amount has more than two decimal places",
            Self::TooLarge => "amount must not exceed 9999999.99",
        };
        f.write_str(message)
    }
}
