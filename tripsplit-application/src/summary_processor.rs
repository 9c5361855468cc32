use crate::{error::SummaryError, model::TripSummary, ports::LedgerSource};
use chrono::NaiveDate;
use tripsplit_domain::{
    Aggregator, BalanceSheet, Payment, SettlementConsolidator, Trip, TripId,
};

/// Builds per-trip settlement summaries from a [`LedgerSource`].
#[derive(Clone, Copy)]
pub struct SummaryProcessor<'a> {
    source: &'a dyn LedgerSource,
}

impl<'a> SummaryProcessor<'a> {
    pub fn new(source: &'a dyn LedgerSource) -> Self {
        Self { source }
    }

    /// Aggregates the trip's debts, then nets them pair by pair.
    ///
    /// Aggregation finishes before consolidation starts; the consolidator relies on
    /// each ordered pair appearing once.
    pub fn summarize(&self, trip_id: TripId) -> Result<TripSummary, SummaryError> {
        let trip = self.find_trip(trip_id)?;
        let debts = self.source.raw_debts(trip_id)?;
        let debt_count = debts.len();

        let pairs = Aggregator.aggregate(debts)?;
        let settlements = SettlementConsolidator.consolidate(&pairs)?;

        let mut balances = BalanceSheet::with_people(trip.travelers());
        balances.apply_settlements(&settlements);

        tracing::debug!(
            trip = %trip_id,
            debts = debt_count,
            pairs = pairs.len(),
            settlements = settlements.len(),
            "Built trip summary"
        );

        Ok(TripSummary {
            trip,
            settlements,
            balances,
        })
    }

    pub fn summarize_all(&self) -> Result<Vec<TripSummary>, SummaryError> {
        self.source
            .trips()
            .iter()
            .map(|trip| self.summarize(trip.id()))
            .collect()
    }

    pub fn payments(&self, trip_id: TripId) -> Result<Vec<Payment>, SummaryError> {
        self.find_trip(trip_id)?;
        self.source.payments(trip_id)
    }

    /// The trip in progress on `today`, when exactly one trip covers that date.
    pub fn current_trip(&self, today: NaiveDate) -> Option<Trip> {
        let mut active = self
            .source
            .trips()
            .into_iter()
            .filter(|trip| trip.is_active_on(today));
        let first = active.next()?;
        if active.next().is_some() {
            return None;
        }
        Some(first)
    }

    fn find_trip(&self, trip_id: TripId) -> Result<Trip, SummaryError> {
        self.source
            .trip(trip_id)
            .ok_or(SummaryError::UnknownTrip(trip_id))
    }
}
