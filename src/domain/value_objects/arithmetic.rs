//! # Money Arithmetic
//!
//! Rounding and formatting helpers for quoted amounts.
//!
//! All amounts are [`Decimal`] so rounding is applied to the exact decimal
//! value rather than a binary approximation: `324.975` rounds to `324.98`.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::value_objects::arithmetic::round_money;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(round_money(Decimal::new(324_975, 3)), Decimal::new(32_498, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency every quote is expressed in.
pub const CURRENCY: &str = "CNY";

/// Number of decimal places kept on rounded amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to two decimal places, halves away from zero.
#[inline]
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly two decimal places.
///
/// The value is rounded with [`round_money`] first, then padded.
#[must_use]
pub fn format_fixed2(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(324_975, 3)), Decimal::new(32_498, 2));
        assert_eq!(round_money(Decimal::new(499_995, 3)), Decimal::new(50_000, 2));
        assert_eq!(round_money(Decimal::new(-1_005, 3)), Decimal::new(-101, 2));
    }

    #[test]
    fn leaves_short_scales_alone() {
        assert_eq!(round_money(Decimal::new(15, 1)), Decimal::new(15, 1));
        assert_eq!(round_money(Decimal::from(900)), Decimal::from(900));
    }

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(format_fixed2(Decimal::from(600)), "600.00");
        assert_eq!(format_fixed2(Decimal::new(33_333, 2)), "333.33");
        assert_eq!(format_fixed2(Decimal::new(4_999_949, 4)), "499.99");
        assert_eq!(format_fixed2(Decimal::new(499_995, 3)), "500.00");
        assert_eq!(format_fixed2(Decimal::new(12_345, 3)), "12.35");
    }
}
