use indexmap::IndexMap;
use thiserror::Error;
use tripsplit_application::{LedgerSource, SummaryError, TripLedger};
use tripsplit_domain::{
    DebtGenerator, LedgerEntry, LedgerError, Payment, PersonId, RawDebtEntry, Trip, TripId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerWriteError {
    #[error("Trip {0} is already recorded")]
    DuplicateTrip(TripId),
    #[error("Trip {0} does not exist")]
    UnknownTrip(TripId),
    #[error("{person} is not a traveler of trip {trip}")]
    UnknownTraveler { trip: TripId, person: PersonId },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

struct StoredTrip {
    trip: Trip,
    payments: Vec<Payment>,
    entries: Vec<LedgerEntry>,
}

/// Keeps trips, payments and their generated ledger rows in memory.
///
/// Ledger rows are generated once, when the payment is recorded.
#[derive(Default)]
pub struct InMemoryLedger {
    trips: IndexMap<TripId, StoredTrip>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: TripLedger) -> Result<Self, LedgerWriteError> {
        let mut store = Self::new();
        for record in ledger.trips {
            let trip_id = record.trip.id();
            store.add_trip(record.trip)?;
            for payment in record.payments {
                store.record_payment(trip_id, payment)?;
            }
        }
        Ok(store)
    }

    pub fn add_trip(&mut self, trip: Trip) -> Result<(), LedgerWriteError> {
        let trip_id = trip.id();
        if self.trips.contains_key(&trip_id) {
            return Err(LedgerWriteError::DuplicateTrip(trip_id));
        }
        self.trips.insert(
            trip_id,
            StoredTrip {
                trip,
                payments: Vec::new(),
                entries: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn record_payment(
        &mut self,
        trip_id: TripId,
        payment: Payment,
    ) -> Result<(), LedgerWriteError> {
        let stored = self
            .trips
            .get_mut(&trip_id)
            .ok_or(LedgerWriteError::UnknownTrip(trip_id))?;

        if let Some(person) = std::iter::once(&payment.payer)
            .chain(&payment.debitors)
            .find(|person| !stored.trip.has_traveler(person))
        {
            return Err(LedgerWriteError::UnknownTraveler {
                trip: trip_id,
                person: person.clone(),
            });
        }

        let entries = DebtGenerator.split(&payment)?;
        tracing::debug!(
            trip = %trip_id,
            payer = %payment.payer,
            value = %payment.value,
            entries = entries.len(),
            "Recorded payment"
        );

        stored.entries.extend(entries);
        stored.payments.push(payment);
        Ok(())
    }

    pub fn entries(&self, trip_id: TripId) -> Option<&[LedgerEntry]> {
        self.trips
            .get(&trip_id)
            .map(|stored| stored.entries.as_slice())
    }
}

impl LedgerSource for InMemoryLedger {
    fn trips(&self) -> Vec<Trip> {
        self.trips.values().map(|stored| stored.trip.clone()).collect()
    }

    fn trip(&self, trip_id: TripId) -> Option<Trip> {
        self.trips.get(&trip_id).map(|stored| stored.trip.clone())
    }

    fn payments(&self, trip_id: TripId) -> Result<Vec<Payment>, SummaryError> {
        self.trips
            .get(&trip_id)
            .map(|stored| stored.payments.clone())
            .ok_or(SummaryError::UnknownTrip(trip_id))
    }

    fn raw_debts(&self, trip_id: TripId) -> Result<Vec<RawDebtEntry>, SummaryError> {
        let entries = self
            .entries(trip_id)
            .ok_or(SummaryError::UnknownTrip(trip_id))?;
        Ok(entries
            .iter()
            .cloned()
            .filter_map(LedgerEntry::into_raw_debt)
            .collect())
    }
}
