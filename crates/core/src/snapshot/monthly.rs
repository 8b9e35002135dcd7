//! Monthly income/expense statistics.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use centime_shared::types::{percent_of, round_money};

use super::types::{CategorySpend, DayBreakdown, MonthSummary, TopExpense};
use crate::forecast::engine::days_in_month;
use crate::ledger::Transaction;

/// Largest expenses surfaced per month.
const TOP_EXPENSE_COUNT: usize = 5;

/// Summarizes one calendar month of transactions, day by day.
///
/// `month` is 1-12. Transactions outside the month are ignored, so
/// callers may pass either a pre-filtered range or the owner's full
/// ledger. The daily series carries one entry per calendar day with
/// inactive days at zero; the savings rate is the percentage of income
/// kept, zero when there was no income.
#[must_use]
pub fn month_summary(transactions: &[Transaction], year: i32, month: u32) -> MonthSummary {
    let mut daily: Vec<DayBreakdown> = (1..=days_in_month(year, month))
        .map(|day| DayBreakdown {
            day,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut expenses: Vec<&Transaction> = Vec::new();
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for tx in transactions {
        if tx.date.year() != year || tx.date.month() != month {
            continue;
        }
        let slot = &mut daily[(tx.date.day() - 1) as usize];
        if tx.is_income() {
            slot.income += tx.amount;
            total_income += tx.amount;
        } else {
            slot.expense += tx.amount;
            total_expense += tx.amount;
            *by_category.entry(tx.category.clone()).or_default() += tx.amount;
            expenses.push(tx);
        }
    }

    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    let top_expenses = expenses
        .iter()
        .take(TOP_EXPENSE_COUNT)
        .map(|t| TopExpense {
            label: t.label.clone(),
            amount: t.amount,
            date: t.date,
        })
        .collect();

    let categories = by_category
        .into_iter()
        .map(|(category, total)| CategorySpend { category, total })
        .collect();

    MonthSummary {
        year,
        month,
        daily,
        categories,
        top_expenses,
        total_income,
        total_expense,
        net_result: total_income - total_expense,
        savings_rate: round_money(percent_of(total_income - total_expense, total_income)),
    }
}
