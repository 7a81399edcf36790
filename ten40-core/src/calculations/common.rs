//! Shared rounding helpers for tax calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places using half-up (away from zero) rounding,
/// the standard financial convention.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole dollar, half away from zero.
///
/// Applied only when assembling a result; intermediate bracket math is
/// never rounded, so rounding error cannot compound across brackets.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ten40_core::calculations::common::round_dollars;
///
/// assert_eq!(round_dollars(dec!(5161.5)), dec!(5162));
/// assert_eq!(round_dollars(dec!(5161.49)), dec!(5161));
/// assert_eq!(round_dollars(dec!(-161.5)), dec!(-162));
/// ```
pub fn round_dollars(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
