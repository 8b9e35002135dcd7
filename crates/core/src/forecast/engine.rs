//! Month-end projection from the current burn rate.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use centime_shared::types::round_money;

use super::types::{Forecast, ForecastStatus};
use crate::ledger::{RecurringObligation, Transaction};
use crate::snapshot::upcoming_obligations;

/// Projects whether the owner ends the current calendar month above zero.
///
/// Burn so far this month is averaged over the days already passed
/// (`max(1, ...)` guards the first of the month) and extrapolated over
/// the days left. Upcoming obligations are recomputed here rather than
/// taken from a snapshot, so the engine is testable on its own.
#[must_use]
pub fn project_month_end(
    balance: Decimal,
    recurring: &[RecurringObligation],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Forecast {
    let days_passed = today.day();
    let days_left = days_in_month(today.year(), today.month()).saturating_sub(days_passed);

    let month_expense: Decimal = transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month_of(today))
        .map(|t| t.amount)
        .sum();

    let avg_daily_burn = month_expense / Decimal::from(days_passed.max(1));
    let upcoming = upcoming_obligations(recurring, today);
    let projected_burn = avg_daily_burn * Decimal::from(days_left);
    let projected_end = balance - upcoming - projected_burn;

    let status = if projected_end > Decimal::ZERO {
        ForecastStatus::Safe
    } else {
        ForecastStatus::Danger
    };

    Forecast {
        days_left,
        avg_daily_burn: round_money(avg_daily_burn),
        projected_end_balance: round_money(projected_end),
        status,
        upcoming_obligations: upcoming,
    }
}

/// Number of days in the given calendar month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
