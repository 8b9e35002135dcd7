//! Ledger domain types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{BudgetLimitId, GoalId, OwnerId, RecurringId, TransactionId};

/// Transaction kind: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Income entry (salary, refund, transfer in).
    Income,
    /// Expense entry (purchase, bill, transfer out).
    Expense,
}

/// A single ledger transaction.
///
/// Immutable once accepted by the validation chain; the `amount > 0`
/// invariant is enforced there and never re-checked downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Owner this transaction belongs to.
    pub owner_id: OwnerId,
    /// Human-readable label (non-empty).
    pub label: String,
    /// Amount in currency units (positive).
    pub amount: Decimal,
    /// Income or expense.
    pub kind: TxKind,
    /// Spending category.
    pub category: String,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
}

impl Transaction {
    /// Returns true if this transaction falls in the same calendar
    /// year-month as `date`.
    #[must_use]
    pub fn in_month_of(&self, date: NaiveDate) -> bool {
        self.date.year() == date.year() && self.date.month() == date.month()
    }

    /// Returns true for expense-kind transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    /// Returns true for income-kind transactions.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }
}

/// A recurring monthly obligation (bill) with a fixed due day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringObligation {
    /// Unique identifier.
    pub id: RecurringId,
    /// Owner this obligation belongs to.
    pub owner_id: OwnerId,
    /// Human-readable label.
    pub label: String,
    /// Amount billed each month.
    pub amount: Decimal,
    /// Day of month the bill is due (1-31).
    pub due_day: u32,
    /// Income or expense.
    pub kind: TxKind,
}

/// Priority of a savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    /// Nice to have.
    Low,
    /// Default priority.
    Medium,
    /// Must hit the deadline.
    High,
}

/// A savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier.
    pub id: GoalId,
    /// Owner this goal belongs to.
    pub owner_id: OwnerId,
    /// Human-readable label.
    pub label: String,
    /// Target amount (positive).
    pub target: Decimal,
    /// Amount saved so far (non-negative).
    pub saved: Decimal,
    /// Deadline for reaching the target.
    pub deadline: NaiveDate,
    /// Goal priority.
    pub priority: GoalPriority,
}

impl Goal {
    /// Returns true when the saved amount has reached the target.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.saved >= self.target
    }
}

/// Spending cap for one category. At most one per (owner, category).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBudgetLimit {
    /// Unique identifier.
    pub id: BudgetLimitId,
    /// Owner this limit belongs to.
    pub owner_id: OwnerId,
    /// Category the cap applies to.
    pub category: String,
    /// Maximum spend per accounting window.
    pub cap: Decimal,
}

/// The owner's setup profile.
///
/// Presence alone marks the account as configured; the snapshot never
/// errors when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owner this profile belongs to.
    pub owner_id: OwnerId,
    /// Preferred supermarket, used by the meal-plan collaborator.
    pub supermarket: String,
    /// Dietary preference, used by the meal-plan collaborator.
    pub diet: String,
}
