//! Property-based tests for state aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use centime_shared::types::{OwnerId, TransactionId};

use super::aggregate::aggregate;
use crate::ledger::{Transaction, TxKind};

fn kind_strategy() -> impl Strategy<Value = TxKind> {
    prop_oneof![Just(TxKind::Income), Just(TxKind::Expense)]
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("food".to_string()),
        Just("transport".to_string()),
        Just("rent".to_string()),
    ]
}

prop_compose! {
    fn arb_transaction()(
        cents in 1i64..10_000_00,
        kind in kind_strategy(),
        category in category_strategy(),
        day in 1u32..=28,
        month in 1u32..=12,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            owner_id: OwnerId::new(),
            label: "entry".to_string(),
            amount: Decimal::new(cents, 2),
            kind,
            category,
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every aggregated figure is invariant under permutation of the
    /// transaction list - summation is commutative.
    #[test]
    fn prop_aggregate_order_independent(
        (original, shuffled) in proptest::collection::vec(arb_transaction(), 0..40)
            .prop_flat_map(|v| {
                let original = v.clone();
                Just(v).prop_shuffle().prop_map(move |s| (original.clone(), s))
            }),
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let a = aggregate(&original, &[], None, today);
        let b = aggregate(&shuffled, &[], None, today);
        prop_assert_eq!(a, b);
    }

    /// Balance equals the signed sum computed independently.
    #[test]
    fn prop_balance_matches_signed_sum(
        txs in proptest::collection::vec(arb_transaction(), 0..40),
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let expected: Decimal = txs
            .iter()
            .map(|t| if t.is_income() { t.amount } else { -t.amount })
            .sum();

        let agg = aggregate(&txs, &[], None, today);
        prop_assert_eq!(agg.balance, expected);
    }
}
