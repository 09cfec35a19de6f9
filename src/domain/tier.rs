use crate::domain::rates::{
    ACCELERATED_MULTIPLIER, HALF_PAYOUT_CEILING, HALF_PAYOUT_MULTIPLIER, NO_PAYOUT_CEILING,
    SCALED_PAYOUT_CEILING,
};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Payout band selected by the percentage of the gross-add goal achieved.
///
/// The bands partition `[0, ∞)` with inclusive upper bounds, so a value
/// sitting exactly on a boundary belongs to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    /// Up to 70% of goal: nothing is paid.
    NoPayout,
    /// Above 70% and up to 80%: half of the subtotal.
    HalfPayout,
    /// Above 80% and up to 119%: the multiplier tracks the percentage itself.
    Scaled,
    /// Above 119%: flat 1.2 accelerator.
    Accelerated,
}

impl PerformanceTier {
    pub fn for_percentage(percentage: Decimal) -> Self {
        if percentage <= NO_PAYOUT_CEILING {
            PerformanceTier::NoPayout
        } else if percentage <= HALF_PAYOUT_CEILING {
            PerformanceTier::HalfPayout
        } else if percentage <= SCALED_PAYOUT_CEILING {
            PerformanceTier::Scaled
        } else {
            PerformanceTier::Accelerated
        }
    }

    /// Multiplier applied to the commission subtotal.
    ///
    /// The `Scaled` band is labelled "100%" but pays `percentage / 100`,
    /// e.g. 0.95 at 95% of goal.
    pub fn multiplier(self, percentage: Decimal) -> Decimal {
        match self {
            PerformanceTier::NoPayout => Decimal::ZERO,
            PerformanceTier::HalfPayout => HALF_PAYOUT_MULTIPLIER,
            PerformanceTier::Scaled => percentage / Decimal::ONE_HUNDRED,
            PerformanceTier::Accelerated => ACCELERATED_MULTIPLIER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::NoPayout => "0% (0-70% of goal)",
            PerformanceTier::HalfPayout => "50% (71-80% of goal)",
            PerformanceTier::Scaled => "100% (81-119% of goal)",
            PerformanceTier::Accelerated => "120% (120%+ of goal)",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as its label, the text the calculator displays.
impl Serialize for PerformanceTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn multiplier_at(percentage: Decimal) -> Decimal {
        PerformanceTier::for_percentage(percentage).multiplier(percentage)
    }

    #[test]
    fn test_boundaries_resolve_to_lower_tier() {
        assert_eq!(PerformanceTier::for_percentage(dec!(0)), PerformanceTier::NoPayout);
        assert_eq!(PerformanceTier::for_percentage(dec!(70)), PerformanceTier::NoPayout);
        assert_eq!(PerformanceTier::for_percentage(dec!(70.0001)), PerformanceTier::HalfPayout);
        assert_eq!(PerformanceTier::for_percentage(dec!(80)), PerformanceTier::HalfPayout);
        assert_eq!(PerformanceTier::for_percentage(dec!(80.0001)), PerformanceTier::Scaled);
        assert_eq!(PerformanceTier::for_percentage(dec!(119)), PerformanceTier::Scaled);
        assert_eq!(PerformanceTier::for_percentage(dec!(119.0001)), PerformanceTier::Accelerated);
    }

    #[test]
    fn test_multipliers_at_boundaries() {
        assert_eq!(multiplier_at(dec!(70.0)), dec!(0));
        assert_eq!(multiplier_at(dec!(70.0001)), dec!(0.5));
        assert_eq!(multiplier_at(dec!(80.0)), dec!(0.5));
        assert_eq!(multiplier_at(dec!(80.0001)), dec!(0.800001));
        assert_eq!(multiplier_at(dec!(119.0)), dec!(1.19));
        assert_eq!(multiplier_at(dec!(119.0001)), dec!(1.2));
    }

    #[test]
    fn test_scaled_tier_tracks_percentage() {
        assert_eq!(multiplier_at(dec!(95)), dec!(0.95));
        assert_eq!(multiplier_at(dec!(100)), dec!(1));
    }

    #[test]
    fn test_labels() {
        assert_eq!(PerformanceTier::HalfPayout.to_string(), "50% (71-80% of goal)");
        assert_eq!(PerformanceTier::Accelerated.label(), "120% (120%+ of goal)");
    }

    #[test]
    fn test_tier_serializes_as_label() {
        let json = serde_json::to_string(&PerformanceTier::Scaled).unwrap();
        assert_eq!(json, "\"100% (81-119% of goal)\"");
    }
}
