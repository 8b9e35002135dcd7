//! Domain types for the personal ledger.
//!
//! This module defines the records the rest of the core computes over:
//! - Transactions (income and expense entries)
//! - Recurring obligations (monthly bills with a fixed due day)
//! - Savings goals
//! - Per-category budget limits
//! - The owner's setup profile

pub mod types;

pub use types::{
    CategoryBudgetLimit, Goal, GoalPriority, Profile, RecurringObligation, Transaction, TxKind,
};
