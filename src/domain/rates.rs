//! Commission rates and thresholds for the monthly compensation plan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-activation rate for $30 plans. Intentionally zero: they count toward
/// the gross-add goal but pay nothing themselves.
pub const PLAN_30_RATE: Decimal = dec!(0);
pub const PLAN_40_RATE: Decimal = dec!(2);
pub const PLAN_55_RATE: Decimal = dec!(5);
pub const PLAN_60_RATE: Decimal = dec!(6);

pub const UPGRADE_RATE: Decimal = dec!(3);

/// Paid per auto-pay enrollment, only once the bonus gate is open.
pub const AUTO_PAY_RATE: Decimal = dec!(1);
/// Paid per protection-plan enrollment, only once the bonus gate is open.
pub const PROTECT_RATE: Decimal = dec!(1);

pub const ACCESSORIES_RATE: Decimal = dec!(0.07);

pub const PPP_ACTIVATION_RATE: Decimal = dec!(1);
pub const PPP_ACCESSORIES_RATE: Decimal = dec!(0.03);

/// Paid on a delayed schedule; never part of the monthly total.
pub const AIA_RATE: Decimal = dec!(20);

/// Upper bounds (inclusive) of the performance tiers, in percent of goal.
pub const NO_PAYOUT_CEILING: Decimal = dec!(70);
pub const HALF_PAYOUT_CEILING: Decimal = dec!(80);
pub const SCALED_PAYOUT_CEILING: Decimal = dec!(119);

pub const HALF_PAYOUT_MULTIPLIER: Decimal = dec!(0.5);
pub const ACCELERATED_MULTIPLIER: Decimal = dec!(1.2);

/// Percent of the gross-add goal at which the bonus gate opens.
pub const BONUS_GATE_PERCENTAGE: Decimal = dec!(100);

/// Largest value any input field can hold after coercion.
pub const MAX_FIELD_VALUE: Decimal = dec!(1000000000000);
