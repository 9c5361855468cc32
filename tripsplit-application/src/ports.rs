use crate::{
    error::{LedgerParseError, SummaryError},
    model::TripLedger,
};
use std::collections::HashMap;
use tripsplit_domain::{Payment, PersonId, RawDebtEntry, Trip, TripId};

/// Read access to stored trips and the debts generated from their payments.
pub trait LedgerSource: Send + Sync {
    fn trips(&self) -> Vec<Trip>;

    fn trip(&self, trip_id: TripId) -> Option<Trip>;

    fn payments(&self, trip_id: TripId) -> Result<Vec<Payment>, SummaryError>;

    /// Debts between distinct people for one trip; the payer's own rows are excluded.
    fn raw_debts(&self, trip_id: TripId) -> Result<Vec<RawDebtEntry>, SummaryError>;
}

pub trait LedgerParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<TripLedger, LedgerParseError>;
}

pub trait PersonDirectory: Send + Sync {
    fn display_name(&self, person: &PersonId) -> Option<&str>;
}

impl PersonDirectory for HashMap<PersonId, String> {
    fn display_name(&self, person: &PersonId) -> Option<&str> {
        self.get(person).map(String::as_str)
    }
}
