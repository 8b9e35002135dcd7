//! The validation chain: ordered rule stages with fail-fast evaluation.

use chrono::Duration;
use rust_decimal::Decimal;

use centime_shared::config::ValidationSettings;
use centime_shared::types::OwnerId;
use centime_shared::AppResult;

use super::types::{RejectReason, Stage, ValidationContext, Verdict};
use crate::ledger::{CategoryBudgetLimit, Transaction};
use crate::store::LedgerStore;

/// Ordered sequence of rule stages a candidate must pass before persistence.
///
/// Stage order is caller-defined; [`ValidationChain::new`] uses the
/// reference order Amount, Duplicate, BudgetLimit. Store data is fetched
/// only when the stage that needs it actually runs, so a candidate
/// rejected on amount never touches the store.
#[derive(Debug, Clone)]
pub struct ValidationChain {
    stages: Vec<Stage>,
    settings: ValidationSettings,
}

impl ValidationChain {
    /// Creates a chain with the reference stage order.
    #[must_use]
    pub fn new(settings: ValidationSettings) -> Self {
        Self::with_stages(
            vec![Stage::Amount, Stage::Duplicate, Stage::BudgetLimit],
            settings,
        )
    }

    /// Creates a chain with a caller-defined stage order.
    #[must_use]
    pub fn with_stages(stages: Vec<Stage>, settings: ValidationSettings) -> Self {
        Self { stages, settings }
    }

    /// Runs the candidate through every stage in order.
    ///
    /// Returns the first rejection, or `Accepted` when all stages pass.
    /// Rejections are values; `Err` is reserved for store failures, which
    /// propagate untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a stage's store lookup fails.
    pub fn validate<S: LedgerStore>(
        &self,
        store: &S,
        candidate: &Transaction,
        owner: OwnerId,
        ctx: &ValidationContext,
    ) -> AppResult<Verdict> {
        for stage in &self.stages {
            let verdict = match stage {
                Stage::Amount => check_amount(candidate, self.settings.ceiling()),
                Stage::Duplicate => {
                    let start = candidate.date
                        - Duration::days(self.settings.duplicate_lookback_days);
                    let end = candidate.date
                        + Duration::days(self.settings.duplicate_lookahead_days);
                    let recent = store.list_transactions_in_range(owner, start, end)?;
                    check_duplicate(candidate, &recent)
                }
                Stage::BudgetLimit => {
                    if candidate.is_expense() {
                        let limit = store.category_limit(owner, &candidate.category)?;
                        check_budget_limit(candidate, limit.as_ref(), ctx)
                    } else {
                        Verdict::Accepted
                    }
                }
            };

            if let Verdict::Rejected { reason } = verdict {
                tracing::debug!(stage = ?stage, code = reason.code(), "candidate rejected");
                return Ok(Verdict::Rejected { reason });
            }
        }

        Ok(Verdict::Accepted)
    }
}

/// Rejects non-positive amounts and amounts above the plausibility ceiling.
///
/// Applies to all transaction kinds.
pub(crate) fn check_amount(candidate: &Transaction, ceiling: Decimal) -> Verdict {
    if candidate.amount <= Decimal::ZERO {
        return Verdict::Rejected {
            reason: RejectReason::NonPositiveAmount,
        };
    }

    if candidate.amount > ceiling {
        return Verdict::Rejected {
            reason: RejectReason::ImplausibleAmount {
                amount: candidate.amount,
            },
        };
    }

    Verdict::Accepted
}

/// Rejects exact re-submissions of an existing transaction.
///
/// `recent` is already scoped to the candidate's duplicate window, so the
/// date check is the window itself; within it, only exact equality on
/// label, amount, and kind counts - no fuzzy matching. Legitimately
/// repeated labels ("Coffee") spaced further apart pass.
pub(crate) fn check_duplicate(candidate: &Transaction, recent: &[Transaction]) -> Verdict {
    for existing in recent {
        if existing.label == candidate.label
            && existing.amount == candidate.amount
            && existing.kind == candidate.kind
        {
            return Verdict::Rejected {
                reason: RejectReason::DuplicateTransaction {
                    label: existing.label.clone(),
                    amount: existing.amount,
                },
            };
        }
    }

    Verdict::Accepted
}

/// Rejects an expense that would push its category past the configured cap.
///
/// The context's per-category spend is the caller's current-calendar-month
/// accumulation, excluding the candidate. No configured limit means
/// unconditional acceptance.
pub(crate) fn check_budget_limit(
    candidate: &Transaction,
    limit: Option<&CategoryBudgetLimit>,
    ctx: &ValidationContext,
) -> Verdict {
    let Some(limit) = limit else {
        return Verdict::Accepted;
    };

    let projected = ctx.spend_for(&candidate.category) + candidate.amount;
    if projected > limit.cap {
        return Verdict::Rejected {
            reason: RejectReason::BudgetLimitExceeded {
                category: candidate.category.clone(),
                projected,
                cap: limit.cap,
            },
        };
    }

    Verdict::Accepted
}
