//! Read-only collaborator contract for the ledger store.
//!
//! The core never persists anything. It consumes an already-built store
//! through this trait: one synchronous fetch per call, no retries, no
//! caching. Timeouts and reconnection are the implementor's concern; a
//! failing store must surface as `Err`, never as an empty collection.

use chrono::NaiveDate;

use centime_shared::types::OwnerId;
use centime_shared::AppResult;

use crate::ledger::{CategoryBudgetLimit, Goal, Profile, RecurringObligation, Transaction};

/// Read-only accessor over the owner's persisted ledger data.
///
/// Concurrency note: two concurrent writers submitting near-identical
/// transactions can each pass the duplicate rule, because each sees a
/// store snapshot without the other's pending write. The rule chain
/// cannot close that race; a uniqueness constraint or serializable
/// transaction at the store layer is the defense in depth.
pub trait LedgerStore {
    /// Lists all transactions for an owner.
    fn list_transactions(&self, owner: OwnerId) -> AppResult<Vec<Transaction>>;

    /// Lists transactions whose date falls in `[start, end]` (inclusive).
    fn list_transactions_in_range(
        &self,
        owner: OwnerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Transaction>>;

    /// Returns the budget limit configured for a category, if any.
    fn category_limit(
        &self,
        owner: OwnerId,
        category: &str,
    ) -> AppResult<Option<CategoryBudgetLimit>>;

    /// Lists all recurring obligations for an owner.
    fn list_recurring(&self, owner: OwnerId) -> AppResult<Vec<RecurringObligation>>;

    /// Lists all savings goals for an owner.
    fn list_goals(&self, owner: OwnerId) -> AppResult<Vec<Goal>>;

    /// Returns the owner's setup profile, if the account is configured.
    fn profile(&self, owner: OwnerId) -> AppResult<Option<Profile>>;

    /// Counts the owner's pantry items (consumed by the Provisioner badge).
    fn pantry_count(&self, owner: OwnerId) -> AppResult<u32>;
}
