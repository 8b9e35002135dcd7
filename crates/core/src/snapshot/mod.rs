//! Derived financial state aggregation.
//!
//! Folds the owner's raw collections into one consistent snapshot:
//! balance, upcoming obligations, safe balance, monthly totals, burn,
//! and per-category spend. The `yearly` and `monthly` modules add the
//! statistics views over the same data. Pure computation - no store
//! access, no side effects, identical under any permutation of the
//! input lists.

pub mod aggregate;
pub mod monthly;
pub mod types;
pub mod yearly;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{aggregate, upcoming_obligations};
pub use monthly::month_summary;
pub use types::{
    Aggregates, CategorySpend, DayBreakdown, MonthBreakdown, MonthSummary, Snapshot, TopExpense,
    YearSummary,
};
pub use yearly::year_summary;
