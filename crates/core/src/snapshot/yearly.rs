//! Yearly income/expense statistics.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{MonthBreakdown, YearSummary};
use crate::ledger::Transaction;

/// Summarizes one calendar year of transactions, month by month.
///
/// Transactions outside `year` are ignored, so callers may pass either a
/// pre-filtered range or the owner's full ledger. Same pure-fold
/// conventions as [`super::aggregate`]: income adds, expense subtracts.
#[must_use]
pub fn year_summary(transactions: &[Transaction], year: i32) -> YearSummary {
    let mut monthly: Vec<MonthBreakdown> = (1..=12)
        .map(|month| MonthBreakdown {
            month,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            net: Decimal::ZERO,
        })
        .collect();

    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for tx in transactions {
        if tx.date.year() != year {
            continue;
        }
        let slot = &mut monthly[tx.date.month0() as usize];
        if tx.is_income() {
            slot.income += tx.amount;
            total_income += tx.amount;
        } else {
            slot.expense += tx.amount;
            total_expense += tx.amount;
        }
    }

    for slot in &mut monthly {
        slot.net = slot.income - slot.expense;
    }

    YearSummary {
        year,
        total_income,
        total_expense,
        net_result: total_income - total_expense,
        monthly,
    }
}
