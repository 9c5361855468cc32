use fxhash::FxHashSet;
use proptest::prelude::*;
use tripsplit_domain::{
    Aggregator, BalanceSheet, DebtGenerator, Money, PairKey, Payment, PersonId, RawDebtEntry,
    SettlementConsolidator,
};

const PEOPLE: [&str; 5] = ["anna", "boris", "ksenia", "oleg", "vova"];

fn raw_debts() -> impl Strategy<Value = Vec<RawDebtEntry>> {
    prop::collection::vec((0usize..PEOPLE.len(), 0usize..PEOPLE.len(), 1i64..=50_000), 0..=40)
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(debitor, payer, cents)| RawDebtEntry {
                    debitor: PersonId::from(PEOPLE[debitor]),
                    payer: PersonId::from(PEOPLE[payer]),
                    amount: Money::from_minor_units(cents),
                })
                .collect()
        })
}

fn payments() -> impl Strategy<Value = Vec<Payment>> {
    prop::collection::vec(
        (
            0usize..PEOPLE.len(),
            prop::collection::vec(0usize..PEOPLE.len(), 0..=PEOPLE.len()),
            1i64..=100_000,
        ),
        0..=20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(payer, debitors, cents)| Payment {
                title: "expense".to_string(),
                value: Money::from_minor_units(cents),
                payer: PersonId::from(PEOPLE[payer]),
                debitors: debitors
                    .into_iter()
                    .map(|idx| PersonId::from(PEOPLE[idx]))
                    .collect(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn settlements_are_strictly_positive(debts in raw_debts()) {
        let pairs = Aggregator.aggregate(debts).expect("aggregate");
        let settlements = SettlementConsolidator.consolidate(&pairs).expect("consolidate");

        for settlement in &settlements {
            prop_assert!(settlement.amount.is_positive());
            prop_assert_ne!(&settlement.debitor, &settlement.payer);
        }
    }

    #[test]
    fn at_most_one_settlement_per_pair(debts in raw_debts()) {
        let pairs = Aggregator.aggregate(debts).expect("aggregate");
        let settlements = SettlementConsolidator.consolidate(&pairs).expect("consolidate");

        let mut seen = FxHashSet::default();
        for settlement in &settlements {
            prop_assert!(seen.insert(PairKey::new(&settlement.debitor, &settlement.payer)));
        }
    }

    #[test]
    fn consolidation_is_repeatable(debts in raw_debts()) {
        let pairs = Aggregator.aggregate(debts).expect("aggregate");

        let first = SettlementConsolidator.consolidate(&pairs).expect("first run");
        let second = SettlementConsolidator.consolidate(&pairs).expect("second run");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn netting_conserves_each_persons_position(debts in raw_debts()) {
        let pairs = Aggregator.aggregate(debts).expect("aggregate");
        let settlements = SettlementConsolidator.consolidate(&pairs).expect("consolidate");

        let before = BalanceSheet::from_aggregated(&pairs);
        let after = BalanceSheet::from_settlements(&settlements);

        prop_assert!(before.same_positions(&after));
        prop_assert!(after.total().is_zero());
    }

    #[test]
    fn generated_ledgers_feed_the_pipeline(payments in payments()) {
        let debts = DebtGenerator.raw_debts(&payments).expect("generate");
        let pairs = Aggregator.aggregate(debts).expect("aggregate");
        let settlements = SettlementConsolidator.consolidate(&pairs).expect("consolidate");

        let total: Money = settlements.iter().map(|settlement| settlement.amount).sum();
        let gross: Money = pairs.iter().map(|pair| pair.total).sum();
        prop_assert!(total <= gross);
    }
}
