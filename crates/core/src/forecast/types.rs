//! Forecast data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Safe/danger classification of the projected month-end balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    /// Projected to end the month above zero.
    Safe,
    /// Projected to end the month at or below zero.
    Danger,
}

/// Projected end-of-month position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Days remaining in the current calendar month.
    pub days_left: u32,
    /// Average daily spend so far this month, rounded to 2 dp.
    pub avg_daily_burn: Decimal,
    /// Projected balance at month end, rounded to 2 dp.
    pub projected_end_balance: Decimal,
    /// Safe when the projection is strictly positive.
    pub status: ForecastStatus,
    /// Obligations still ahead this month, as counted by the aggregator.
    pub upcoming_obligations: Decimal,
}
