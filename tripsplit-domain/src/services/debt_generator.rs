use crate::{
    error::{AmountDefect, LedgerError},
    model::{LedgerEntry, Money, Payment, PersonId, RawDebtEntry},
};
use fxhash::FxHashSet;

/// Splits payments equally among the payer and their debitors.
pub struct DebtGenerator;

impl DebtGenerator {
    /// Produces the signed ledger rows for one payment.
    ///
    /// The value is divided into `debitors + 1` equal shares in cents; leftover
    /// cents go one each to the debitors in listed order, so the debitor shares
    /// plus the payer's own share always add up to the payment value. Debitors
    /// whose share rounds down to zero get no row.
    pub fn split(&self, payment: &Payment) -> Result<Vec<LedgerEntry>, LedgerError> {
        payment.validate()?;

        let mut seen: FxHashSet<&PersonId> = FxHashSet::default();
        let debitors: Vec<&PersonId> = payment
            .debitors
            .iter()
            .filter(|debitor| **debitor != payment.payer && seen.insert(*debitor))
            .collect();

        if debitors.is_empty() {
            return Ok(Vec::new());
        }

        let total_units = payment.value.to_minor_units().ok_or_else(|| {
            let reason = if payment.value.has_currency_precision() {
                AmountDefect::TooLarge
            } else {
                AmountDefect::ExcessPrecision
            };
            LedgerError::InvalidAmount {
                amount: payment.value,
                reason,
            }
        })?;
        let share_count = debitors.len() as i64 + 1;
        let base = total_units / share_count;
        let remainder = (total_units % share_count) as usize;

        let mut entries = Vec::with_capacity(debitors.len() + 1);
        let mut owed_to_payer = Money::ZERO;
        for (idx, debitor) in debitors.into_iter().enumerate() {
            let mut share = base;
            if idx < remainder {
                share += 1;
            }
            if share == 0 {
                continue;
            }
            let share = Money::from_minor_units(share);
            owed_to_payer += share;
            entries.push(LedgerEntry {
                payer: payment.payer.clone(),
                debitor: debitor.clone(),
                value: share,
            });
        }

        entries.insert(
            0,
            LedgerEntry {
                payer: payment.payer.clone(),
                debitor: payment.payer.clone(),
                value: -owed_to_payer,
            },
        );

        Ok(entries)
    }

    /// Flattens the ledgers of many payments into the debts between distinct people.
    pub fn raw_debts<'p, I>(&self, payments: I) -> Result<Vec<RawDebtEntry>, LedgerError>
    where
        I: IntoIterator<Item = &'p Payment>,
    {
        let mut debts = Vec::new();
        for payment in payments {
            debts.extend(
                self.split(payment)?
                    .into_iter()
                    .filter_map(LedgerEntry::into_raw_debt),
            );
        }
        Ok(debts)
    }
}
