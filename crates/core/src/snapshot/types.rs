//! Snapshot data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forecast::Forecast;
use crate::progression::Progression;

/// Figures derived directly from the owner's raw collections.
///
/// Produced by [`super::aggregate`]; the full [`Snapshot`] adds the
/// forecast and progression computed from these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Whether the owner has completed setup (profile present).
    pub is_configured: bool,
    /// All-time income minus all-time expenses.
    pub balance: Decimal,
    /// Total of obligations whose due day is still ahead this month.
    pub upcoming_obligations: Decimal,
    /// Balance minus upcoming obligations.
    pub safe_balance: Decimal,
    /// Income in the current calendar month.
    pub month_income: Decimal,
    /// Expenses in the current calendar month.
    pub month_expense: Decimal,
    /// Full monthly commitment across all obligations, regardless of due day.
    pub monthly_burn: Decimal,
    /// All-time spend per category, expense entries only.
    pub category_totals: BTreeMap<String, Decimal>,
}

/// The complete derived state for one owner at one reference date.
///
/// Recomputed on every read and owned exclusively by the request that
/// built it; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Whether the owner has completed setup.
    pub is_configured: bool,
    /// All-time income minus all-time expenses.
    pub balance: Decimal,
    /// Total of obligations whose due day is still ahead this month.
    pub upcoming_obligations: Decimal,
    /// Balance minus upcoming obligations.
    pub safe_balance: Decimal,
    /// Income in the current calendar month.
    pub month_income: Decimal,
    /// Expenses in the current calendar month.
    pub month_expense: Decimal,
    /// Full monthly commitment across all obligations.
    pub monthly_burn: Decimal,
    /// All-time spend per category, expense entries only.
    pub category_totals: BTreeMap<String, Decimal>,
    /// Month-end balance projection.
    pub forecast: Forecast,
    /// Experience, tier, and achievement badges.
    pub progression: Progression,
}

impl Snapshot {
    /// Assembles a snapshot from its three computation stages.
    #[must_use]
    pub fn from_parts(aggregates: Aggregates, forecast: Forecast, progression: Progression) -> Self {
        Self {
            is_configured: aggregates.is_configured,
            balance: aggregates.balance,
            upcoming_obligations: aggregates.upcoming_obligations,
            safe_balance: aggregates.safe_balance,
            month_income: aggregates.month_income,
            month_expense: aggregates.month_expense,
            monthly_burn: aggregates.monthly_burn,
            category_totals: aggregates.category_totals,
            forecast,
            progression,
        }
    }
}

/// Income/expense/net for one month of a yearly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBreakdown {
    /// Month number (1-12).
    pub month: u32,
    /// Income in the month.
    pub income: Decimal,
    /// Expenses in the month.
    pub expense: Decimal,
    /// Income minus expenses.
    pub net: Decimal,
}

/// Yearly totals with a per-month breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The calendar year summarized.
    pub year: i32,
    /// Total income over the year.
    pub total_income: Decimal,
    /// Total expenses over the year.
    pub total_expense: Decimal,
    /// Income minus expenses.
    pub net_result: Decimal,
    /// One entry per month, January through December.
    pub monthly: Vec<MonthBreakdown>,
}

/// Income/expense for one calendar day of a monthly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// Day of month (1-31).
    pub day: u32,
    /// Income on the day.
    pub income: Decimal,
    /// Expenses on the day.
    pub expense: Decimal,
}

/// Total spend in one category over the summarized month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Spending category.
    pub category: String,
    /// Expense total for the category.
    pub total: Decimal,
}

/// One of the month's largest expense entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopExpense {
    /// Label of the expense.
    pub label: String,
    /// Amount of the expense.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
}

/// Monthly totals with a daily series, category breakdown, and top expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The calendar year of the summarized month.
    pub year: i32,
    /// The month summarized (1-12).
    pub month: u32,
    /// One entry per calendar day; inactive days stay at zero.
    pub daily: Vec<DayBreakdown>,
    /// Expense totals per category, ordered by category name.
    pub categories: Vec<CategorySpend>,
    /// The largest expenses by amount, descending, at most five.
    pub top_expenses: Vec<TopExpense>,
    /// Total income over the month.
    pub total_income: Decimal,
    /// Total expenses over the month.
    pub total_expense: Decimal,
    /// Income minus expenses.
    pub net_result: Decimal,
    /// Percentage of income kept, zero when there was no income. 2 dp.
    pub savings_rate: Decimal,
}
