use crate::{
    error::{AmountDefect, LedgerError},
    model::{AggregatedPair, Money, PersonId, RawDebtEntry},
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Sums raw debts per ordered (debitor, payer) pair.
pub struct Aggregator;

impl Aggregator {
    /// Output order follows the first appearance of each pair in `entries`.
    pub fn aggregate<I>(&self, entries: I) -> Result<Vec<AggregatedPair>, LedgerError>
    where
        I: IntoIterator<Item = RawDebtEntry>,
    {
        let mut totals: IndexMap<(PersonId, PersonId), Money, FxBuildHasher> =
            IndexMap::default();
        let mut self_entries = 0usize;

        for entry in entries {
            ensure_debt_amount(entry.amount)?;
            if entry.debitor == entry.payer {
                self_entries += 1;
                continue;
            }
            *totals
                .entry((entry.debitor, entry.payer))
                .or_insert(Money::ZERO) += entry.amount;
        }

        let pairs: Vec<AggregatedPair> = totals
            .into_iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|((debitor, payer), total)| AggregatedPair {
                debitor,
                payer,
                total,
            })
            .collect();

        tracing::debug!(
            pairs = pairs.len(),
            self_entries,
            "Aggregated raw debts by ordered pair"
        );

        Ok(pairs)
    }
}

pub(crate) fn ensure_debt_amount(amount: Money) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount {
            amount,
            reason: AmountDefect::NotPositive,
        });
    }
    if !amount.has_currency_precision() {
        return Err(LedgerError::InvalidAmount {
            amount,
            reason: AmountDefect::ExcessPrecision,
        });
    }
    Ok(())
}
