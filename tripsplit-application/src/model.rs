use tripsplit_domain::{BalanceSheet, NetSettlement, Payment, Trip};

/// A trip together with the payments recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    pub trip: Trip,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripLedger {
    pub trips: Vec<TripRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSummary {
    pub trip: Trip,
    pub settlements: Vec<NetSettlement>,
    pub balances: BalanceSheet,
}

impl TripSummary {
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
