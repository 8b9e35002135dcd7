//! State aggregation over the owner's raw collections.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::Aggregates;
use crate::ledger::{Profile, RecurringObligation, Transaction};

/// Folds the owner's collections into one consistent set of derived figures.
///
/// Pure function of its inputs: deterministic, order-independent, and it
/// never errors - an absent profile yields `is_configured = false` with
/// the remaining fields computed as usual.
#[must_use]
pub fn aggregate(
    transactions: &[Transaction],
    recurring: &[RecurringObligation],
    profile: Option<&Profile>,
    today: NaiveDate,
) -> Aggregates {
    let is_configured = profile.is_some();

    let mut balance = Decimal::ZERO;
    let mut month_income = Decimal::ZERO;
    let mut month_expense = Decimal::ZERO;
    let mut category_totals: BTreeMap<String, Decimal> = BTreeMap::new();

    for tx in transactions {
        if tx.is_income() {
            balance += tx.amount;
            if tx.in_month_of(today) {
                month_income += tx.amount;
            }
        } else {
            balance -= tx.amount;
            if tx.in_month_of(today) {
                month_expense += tx.amount;
            }
            *category_totals.entry(tx.category.clone()).or_default() += tx.amount;
        }
    }

    let upcoming = upcoming_obligations(recurring, today);
    let monthly_burn: Decimal = recurring.iter().map(|r| r.amount).sum();

    Aggregates {
        is_configured,
        balance,
        upcoming_obligations: upcoming,
        safe_balance: balance - upcoming,
        month_income,
        month_expense,
        monthly_burn,
        category_totals,
    }
}

/// Total of obligations not yet due this calendar cycle.
///
/// Compares day-of-month only: an obligation due on day 5 stops counting
/// as upcoming for the remainder of every month once the 5th has passed.
/// The field captures remaining near-term outflow, not a rolling window.
#[must_use]
pub fn upcoming_obligations(recurring: &[RecurringObligation], today: NaiveDate) -> Decimal {
    recurring
        .iter()
        .filter(|r| r.due_day > today.day())
        .map(|r| r.amount)
        .sum()
}
