//! Ordered rule chain gating transaction writes.
//!
//! A candidate transaction must pass every stage before the caller may
//! persist it. Evaluation is fail-fast: the first stage that rejects
//! stops the chain and its reason is the only one reported. Stages never
//! mutate the candidate.

pub mod chain;
pub mod types;

#[cfg(test)]
mod validation_props;

pub use chain::ValidationChain;
pub use types::{RejectReason, Stage, ValidationContext, Verdict};
