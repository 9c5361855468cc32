use crate::model::{AggregatedPair, Money, NetSettlement, PersonId};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Net position of every person across all of their counterparties.
///
/// Positive: the person is owed money overall. Negative: they owe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceSheet {
    positions: IndexMap<PersonId, Money, FxBuildHasher>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a sheet listing `people` with zero positions, in the given order.
    pub fn with_people<'a, I>(people: I) -> Self
    where
        I: IntoIterator<Item = &'a PersonId>,
    {
        let mut sheet = Self::new();
        for person in people {
            sheet.positions.entry(person.clone()).or_insert(Money::ZERO);
        }
        sheet
    }

    pub fn from_aggregated(pairs: &[AggregatedPair]) -> Self {
        let mut sheet = Self::new();
        sheet.apply_aggregated(pairs);
        sheet
    }

    pub fn from_settlements(settlements: &[NetSettlement]) -> Self {
        let mut sheet = Self::new();
        sheet.apply_settlements(settlements);
        sheet
    }

    pub fn apply_aggregated(&mut self, pairs: &[AggregatedPair]) {
        for pair in pairs {
            self.record(&pair.debitor, &pair.payer, pair.total);
        }
    }

    pub fn apply_settlements(&mut self, settlements: &[NetSettlement]) {
        for settlement in settlements {
            self.record(&settlement.debitor, &settlement.payer, settlement.amount);
        }
    }

    fn record(&mut self, debitor: &PersonId, payer: &PersonId, amount: Money) {
        *self
            .positions
            .entry(debitor.clone())
            .or_insert(Money::ZERO) -= amount;
        *self.positions.entry(payer.clone()).or_insert(Money::ZERO) += amount;
    }

    pub fn position(&self, person: &PersonId) -> Money {
        self.positions.get(person).copied().unwrap_or(Money::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Money)> + '_ {
        self.positions.iter().map(|(person, money)| (person, *money))
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn total(&self) -> Money {
        self.positions.values().copied().sum()
    }

    /// Compares positions person by person, treating absent people as zero.
    pub fn same_positions(&self, other: &BalanceSheet) -> bool {
        self.positions
            .keys()
            .chain(other.positions.keys())
            .all(|person| self.position(person) == other.position(person))
    }
}
