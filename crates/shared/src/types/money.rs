//! Money rounding helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; these helpers keep display
//! rounding and ratio math in one place.

use rust_decimal::Decimal;

/// Decimal places used for amounts surfaced to callers.
pub const MONEY_DP: u32 = 2;

/// Rounds an amount to the standard monetary precision.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_DP)
}

/// Returns `part` as a percentage of `whole`, or zero when `whole` is zero.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}
