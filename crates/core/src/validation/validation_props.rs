//! Property-based tests for the validation rule stages.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use centime_shared::types::{BudgetLimitId, OwnerId, TransactionId};

use super::chain::{check_amount, check_budget_limit, check_duplicate};
use super::types::ValidationContext;
use crate::ledger::{CategoryBudgetLimit, Transaction, TxKind};

const CEILING_CENTS: i64 = 100_000_000; // 1,000,000.00

/// Strategy for amounts in cents, spanning negative through implausible.
fn any_amount_cents() -> impl Strategy<Value = i64> {
    -200_000_000i64..200_000_000i64
}

fn kind_strategy() -> impl Strategy<Value = TxKind> {
    prop_oneof![Just(TxKind::Income), Just(TxKind::Expense)]
}

fn make_tx(amount: Decimal, kind: TxKind, day_offset: i64) -> Transaction {
    let base = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    Transaction {
        id: TransactionId::new(),
        owner_id: OwnerId::new(),
        label: "Coffee".to_string(),
        amount,
        kind,
        category: "food".to_string(),
        date: base + chrono::Duration::days(day_offset),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The amount stage accepts exactly the amounts in (0, ceiling].
    #[test]
    fn prop_amount_accepts_iff_in_range(
        cents in any_amount_cents(),
        kind in kind_strategy(),
    ) {
        let amount = Decimal::new(cents, 2);
        let ceiling = Decimal::new(CEILING_CENTS, 2);
        let candidate = make_tx(amount, kind, 0);

        let accepted = check_amount(&candidate, ceiling).is_accepted();
        let in_range = amount > Decimal::ZERO && amount <= ceiling;
        prop_assert_eq!(accepted, in_range);
    }

    /// Changing any identity field defeats the duplicate match; the date
    /// dimension is the caller's window scoping, not this predicate.
    #[test]
    fn prop_duplicate_needs_exact_match(
        cents in 1i64..CEILING_CENTS,
        offset in -7i64..=1i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let existing = make_tx(amount, TxKind::Expense, offset);
        let recent = vec![existing.clone()];

        // Resubmission of the stored record inside the window is caught.
        let mut same = existing.clone();
        same.id = TransactionId::new();
        same.date = make_tx(amount, TxKind::Expense, 0).date;
        prop_assert!(!check_duplicate(&same, &recent).is_accepted());

        // A different amount passes.
        let mut other = same.clone();
        other.amount = amount + Decimal::new(1, 2);
        prop_assert!(check_duplicate(&other, &recent).is_accepted());

        // A different kind passes.
        let mut other = same;
        other.kind = TxKind::Income;
        prop_assert!(check_duplicate(&other, &recent).is_accepted());
    }

    /// The budget stage rejects exactly when spend + amount exceeds the cap.
    #[test]
    fn prop_budget_limit_boundary(
        spent_cents in 0i64..10_000_00,
        amount_cents in 1i64..10_000_00,
        cap_cents in 1i64..20_000_00,
    ) {
        let candidate = make_tx(Decimal::new(amount_cents, 2), TxKind::Expense, 0);
        let limit = CategoryBudgetLimit {
            id: BudgetLimitId::new(),
            owner_id: OwnerId::new(),
            category: "food".to_string(),
            cap: Decimal::new(cap_cents, 2),
        };
        let mut ctx = ValidationContext::default();
        ctx.category_spend
            .insert("food".to_string(), Decimal::new(spent_cents, 2));

        let accepted = check_budget_limit(&candidate, Some(&limit), &ctx).is_accepted();
        let within = Decimal::new(spent_cents + amount_cents, 2) <= Decimal::new(cap_cents, 2);
        prop_assert_eq!(accepted, within);
    }
}
