use crate::{
    error::{IntegrityViolation, LedgerError},
    model::{AggregatedPair, Money, NetSettlement, PairKey},
    services::aggregator::ensure_debt_amount,
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Nets reciprocal debts between the same two people.
///
/// Pairs are grouped by [`PairKey`] before any netting happens, and every group is
/// resolved exactly once. Debts are never routed through a third person.
pub struct SettlementConsolidator;

/// The two directional totals of one unordered pair.
/// `forward` is owed by the key's lesser person to the greater one.
#[derive(Default)]
struct PairGroup {
    forward: Option<Money>,
    backward: Option<Money>,
}

impl PairGroup {
    fn resolve(self, key: PairKey) -> Option<NetSettlement> {
        let net = self.forward.unwrap_or(Money::ZERO) - self.backward.unwrap_or(Money::ZERO);
        let (lesser, greater) = key.into_parts();
        match net.signum() {
            1 => Some(NetSettlement {
                debitor: lesser,
                payer: greater,
                amount: net,
            }),
            -1 => Some(NetSettlement {
                debitor: greater,
                payer: lesser,
                amount: -net,
            }),
            _ => None,
        }
    }
}

impl SettlementConsolidator {
    /// Output order follows the first appearance of each unordered pair in `pairs`.
    ///
    /// # Errors
    /// * `DataIntegrity` when a person owes themself or an ordered pair appears twice
    /// * `InvalidAmount` when a total is not strictly positive
    pub fn consolidate(&self, pairs: &[AggregatedPair]) -> Result<Vec<NetSettlement>, LedgerError> {
        let mut groups: IndexMap<PairKey, PairGroup, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(pairs.len(), FxBuildHasher::default());

        for pair in pairs {
            if pair.debitor == pair.payer {
                tracing::warn!(person = %pair.debitor, "Self pair reached consolidation");
                return Err(IntegrityViolation::SelfPair {
                    person: pair.debitor.clone(),
                }
                .into());
            }
            ensure_debt_amount(pair.total)?;

            let key = PairKey::new(&pair.debitor, &pair.payer);
            let is_forward = key.lesser() == &pair.debitor;
            let group = groups.entry(key).or_default();
            let slot = if is_forward {
                &mut group.forward
            } else {
                &mut group.backward
            };

            if slot.is_some() {
                tracing::warn!(
                    debitor = %pair.debitor,
                    payer = %pair.payer,
                    "Duplicate ordered pair reached consolidation"
                );
                return Err(IntegrityViolation::DuplicatePair {
                    debitor: pair.debitor.clone(),
                    payer: pair.payer.clone(),
                }
                .into());
            }
            *slot = Some(pair.total);
        }

        let group_count = groups.len();
        let settlements: Vec<NetSettlement> = groups
            .into_iter()
            .filter_map(|(key, group)| group.resolve(key))
            .collect();

        tracing::debug!(
            pairs = pairs.len(),
            groups = group_count,
            settlements = settlements.len(),
            "Consolidated debts"
        );

        Ok(settlements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AmountDefect, model::PersonId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn consolidator() -> SettlementConsolidator {
        SettlementConsolidator
    }

    fn pair(debitor: &str, payer: &str, total: i64) -> AggregatedPair {
        AggregatedPair {
            debitor: debitor.into(),
            payer: payer.into(),
            total: Money::from_minor_units(total * 100),
        }
    }

    fn settlement(debitor: &str, payer: &str, amount: i64) -> NetSettlement {
        NetSettlement {
            debitor: debitor.into(),
            payer: payer.into(),
            amount: Money::from_minor_units(amount * 100),
        }
    }

    #[rstest]
    #[case::partial_netting(
        vec![pair("A", "B", 30), pair("B", "A", 10)],
        vec![settlement("A", "B", 20)]
    )]
    #[case::reverse_dominates(
        vec![pair("A", "B", 10), pair("B", "A", 30)],
        vec![settlement("B", "A", 20)]
    )]
    #[case::reverse_dominates_seen_from_greater_side(
        vec![pair("B", "A", 10), pair("A", "B", 30)],
        vec![settlement("A", "B", 20)]
    )]
    #[case::fully_settled(
        vec![pair("A", "B", 15), pair("B", "A", 15)],
        vec![]
    )]
    #[case::single_direction(
        vec![pair("A", "B", 10)],
        vec![settlement("A", "B", 10)]
    )]
    #[case::single_direction_from_greater(
        vec![pair("B", "A", 10)],
        vec![settlement("B", "A", 10)]
    )]
    #[case::cycle_passes_through(
        vec![pair("A", "B", 10), pair("B", "C", 10), pair("C", "A", 10)],
        vec![settlement("A", "B", 10), settlement("B", "C", 10), settlement("C", "A", 10)]
    )]
    #[case::overlapping_pairs_between_three_people(
        vec![
            pair("A", "B", 30),
            pair("B", "C", 5),
            pair("C", "A", 12),
            pair("B", "A", 10),
            pair("A", "C", 12),
            pair("C", "B", 8),
        ],
        vec![settlement("A", "B", 20), settlement("C", "B", 3)]
    )]
    #[case::empty(vec![], vec![])]
    fn consolidation_cases(
        consolidator: SettlementConsolidator,
        #[case] pairs: Vec<AggregatedPair>,
        #[case] expected: Vec<NetSettlement>,
    ) {
        let result = consolidator.consolidate(&pairs).expect("consolidate");
        assert_eq!(result, expected);
    }

    #[rstest]
    fn rejects_duplicate_ordered_pair(consolidator: SettlementConsolidator) {
        let pairs = vec![pair("A", "B", 10), pair("B", "A", 3), pair("A", "B", 4)];

        let err = consolidator.consolidate(&pairs).expect_err("duplicate");

        assert_eq!(
            err,
            LedgerError::DataIntegrity(IntegrityViolation::DuplicatePair {
                debitor: PersonId::from("A"),
                payer: PersonId::from("B"),
            })
        );
    }

    #[rstest]
    fn rejects_self_pair(consolidator: SettlementConsolidator) {
        let pairs = vec![pair("A", "B", 10), pair("C", "C", 5)];

        let err = consolidator.consolidate(&pairs).expect_err("self pair");

        assert_eq!(
            err,
            LedgerError::DataIntegrity(IntegrityViolation::SelfPair {
                person: PersonId::from("C"),
            })
        );
    }

    #[rstest]
    fn rejects_zero_total(consolidator: SettlementConsolidator) {
        let pairs = vec![pair("A", "B", 0)];

        let err = consolidator.consolidate(&pairs).expect_err("zero total");

        assert_eq!(
            err,
            LedgerError::InvalidAmount {
                amount: Money::ZERO,
                reason: AmountDefect::NotPositive,
            }
        );
    }

    #[rstest]
    fn repeated_runs_agree(consolidator: SettlementConsolidator) {
        let pairs = vec![pair("A", "B", 30), pair("B", "A", 10), pair("C", "A", 7)];

        let first = consolidator.consolidate(&pairs).expect("first run");
        let second = consolidator.consolidate(&pairs).expect("second run");

        assert_eq!(first, second);
    }
}
