//! Snapshot orchestration over a ledger store.

use chrono::NaiveDate;

use centime_shared::types::OwnerId;
use centime_shared::AppResult;

use crate::forecast::engine::days_in_month;
use crate::forecast::project_month_end;
use crate::progression;
use crate::snapshot::{aggregate, month_summary, year_summary, MonthSummary, Snapshot, YearSummary};
use crate::store::LedgerStore;

/// Builds derived state for read requests.
///
/// Holds no state of its own; every call fetches the owner's collections
/// once and runs the pure computation pipeline over them. Store failures
/// propagate untouched - a caller never receives a zeroed snapshot in
/// place of an error.
pub struct SnapshotService;

impl SnapshotService {
    /// Builds the full derived snapshot for one owner at a reference date.
    ///
    /// Composition order: aggregate the raw collections, project the
    /// month end from the aggregated balance, then evaluate progression
    /// from both.
    ///
    /// # Errors
    ///
    /// Returns an error if any store fetch fails.
    pub fn build<S: LedgerStore>(
        store: &S,
        owner: OwnerId,
        today: NaiveDate,
    ) -> AppResult<Snapshot> {
        tracing::debug!(%owner, %today, "building snapshot");

        let transactions = store.list_transactions(owner)?;
        let recurring = store.list_recurring(owner)?;
        let goals = store.list_goals(owner)?;
        let profile = store.profile(owner)?;
        let pantry_count = store.pantry_count(owner)?;

        let aggregates = aggregate(&transactions, &recurring, profile.as_ref(), today);
        let forecast = project_month_end(aggregates.balance, &recurring, &transactions, today);
        let progression = progression::evaluate(
            aggregates.balance,
            &goals,
            aggregates.monthly_burn,
            forecast.status,
            pantry_count,
        );

        Ok(Snapshot::from_parts(aggregates, forecast, progression))
    }

    /// Builds the yearly income/expense summary for one owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fetch fails.
    pub fn year_summary<S: LedgerStore>(
        store: &S,
        owner: OwnerId,
        year: i32,
    ) -> AppResult<YearSummary> {
        tracing::debug!(%owner, year, "building year summary");

        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| centime_shared::AppError::Validation(format!("invalid year: {year}")))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| centime_shared::AppError::Validation(format!("invalid year: {year}")))?;

        let transactions = store.list_transactions_in_range(owner, start, end)?;
        Ok(year_summary(&transactions, year))
    }

    /// Builds the monthly income/expense summary for one owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is invalid or the store fetch fails.
    pub fn month_summary<S: LedgerStore>(
        store: &S,
        owner: OwnerId,
        year: i32,
        month: u32,
    ) -> AppResult<MonthSummary> {
        tracing::debug!(%owner, year, month, "building month summary");

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            centime_shared::AppError::Validation(format!("invalid month: {year}-{month}"))
        })?;
        let end = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
            .ok_or_else(|| {
                centime_shared::AppError::Validation(format!("invalid month: {year}-{month}"))
            })?;

        let transactions = store.list_transactions_in_range(owner, start, end)?;
        Ok(month_summary(&transactions, year, month))
    }
}
