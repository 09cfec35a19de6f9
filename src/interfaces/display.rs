//! Display rounding.
//!
//! Results stay at full precision until they are shown. Values are rounded
//! half-up (midpoint away from zero) and padded to a fixed number of places:
//! two for money and the multiplier, one for the goal percentage.

use crate::domain::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_PLACES: u32 = 2;
pub const PERCENTAGE_PLACES: u32 = 1;
pub const MULTIPLIER_PLACES: u32 = 2;

/// Rounds half-up to `places` and pads the scale so `5` shows as `5.00`.
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// `$42.00`
pub fn currency(amount: Money) -> String {
    format!("${}", round_half_up(amount.value(), CURRENCY_PLACES))
}

/// `75.0%`
pub fn percentage(value: Decimal) -> String {
    format!("{}%", round_half_up(value, PERCENTAGE_PLACES))
}

/// `×0.50`
pub fn multiplier(value: Decimal) -> String {
    format!("×{}", round_half_up(value, MULTIPLIER_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_half_up(dec!(0.125), 2), dec!(0.13));
        assert_eq!(round_half_up(dec!(0.135), 2), dec!(0.14));
        assert_eq!(round_half_up(dec!(2.45), 1), dec!(2.5));
        assert_eq!(round_half_up(dec!(0.124999), 2), dec!(0.12));
    }

    #[test]
    fn test_pads_to_fixed_places() {
        assert_eq!(currency(Money::new(dec!(54))), "$54.00");
        assert_eq!(currency(Money::new(dec!(42.0000001))), "$42.00");
        assert_eq!(percentage(dec!(75)), "75.0%");
        assert_eq!(percentage(dec!(33.333333333)), "33.3%");
        assert_eq!(multiplier(dec!(0.5)), "×0.50");
        assert_eq!(multiplier(dec!(0.955)), "×0.96");
    }
}
