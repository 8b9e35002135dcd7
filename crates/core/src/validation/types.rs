//! Validation verdicts, rejection reasons, and the cross-stage context bag.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rule stage of the validation chain.
///
/// The chain applies stages in the order the caller lists them; the
/// reference order is Amount, Duplicate, BudgetLimit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Rejects non-positive and implausibly large amounts.
    Amount,
    /// Rejects exact re-submissions of a recent transaction.
    Duplicate,
    /// Rejects expenses that would push a category past its cap.
    BudgetLimit,
}

/// Outcome of running a candidate through the chain.
///
/// Rejections are expected domain outcomes, not faults: a consumer sees
/// exactly one accept/reject decision with at most one reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum Verdict {
    /// Every stage passed; the caller may persist the candidate.
    Accepted,
    /// A stage rejected the candidate; no later stage was run.
    Rejected {
        /// The first violated rule.
        reason: RejectReason,
    },
}

impl Verdict {
    /// Returns true when the candidate passed every stage.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Why a candidate transaction was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "code")]
pub enum RejectReason {
    /// Amount was zero or negative.
    #[error("Transaction amount must be positive")]
    NonPositiveAmount,

    /// Amount exceeded the configured plausibility ceiling.
    #[error("Transaction amount seems too large: {amount}. Please verify.")]
    ImplausibleAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// An identical transaction already exists nearby in time.
    #[error("Duplicate transaction detected: {label} ({amount})")]
    DuplicateTransaction {
        /// Label of the matched existing transaction.
        label: String,
        /// Amount of the matched existing transaction.
        amount: Decimal,
    },

    /// The expense would push the category past its configured cap.
    #[error("Budget limit exceeded for {category}: {projected} > {cap}")]
    BudgetLimitExceeded {
        /// Category whose cap would be breached.
        category: String,
        /// Spend already accumulated plus the candidate's amount.
        projected: Decimal,
        /// The configured cap.
        cap: Decimal,
    },
}

impl RejectReason {
    /// Returns the stable reason code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "non-positive-amount",
            Self::ImplausibleAmount { .. } => "implausible-amount",
            Self::DuplicateTransaction { .. } => "duplicate-transaction",
            Self::BudgetLimitExceeded { .. } => "budget-limit-exceeded",
        }
    }
}

/// Caller-supplied data shared across stages.
///
/// The chain only reads from the context; stages never write back.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Spend already accumulated per category in the current calendar
    /// month, excluding the candidate itself.
    pub category_spend: BTreeMap<String, Decimal>,
}

impl ValidationContext {
    /// Returns the accumulated spend for a category, zero when unknown.
    #[must_use]
    pub fn spend_for(&self, category: &str) -> Decimal {
        self.category_spend
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
