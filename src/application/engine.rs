use crate::domain::input::CommissionInput;
use crate::domain::money::Money;
use crate::domain::rates::{
    ACCESSORIES_RATE, AIA_RATE, AUTO_PAY_RATE, BONUS_GATE_PERCENTAGE, PLAN_30_RATE, PLAN_40_RATE,
    PLAN_55_RATE, PLAN_60_RATE, PPP_ACCESSORIES_RATE, PPP_ACTIVATION_RATE, PROTECT_RATE,
    UPGRADE_RATE,
};
use crate::domain::result::CommissionResult;
use crate::domain::tier::PerformanceTier;
use rust_decimal::Decimal;

/// Owns every commission rule.
///
/// `CommissionEngine` is stateless: [`CommissionEngine::compute`] reads only
/// its argument and returns a fresh result, so it is safe to call after every
/// edit and from any thread. It does no coercion of its own; inputs built
/// through `CommissionInput`'s coercing setters or deserializer are already
/// inside the accepted range. Inputs built by hand outside that range still
/// compute, with amounts saturating at the `Decimal` bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommissionEngine;

impl CommissionEngine {
    /// Computes the full payout breakdown for one period.
    pub fn compute(input: &CommissionInput) -> CommissionResult {
        let plan_commission = Money::at_rate(input.plans30, PLAN_30_RATE)
            + Money::at_rate(input.plans40, PLAN_40_RATE)
            + Money::at_rate(input.plans55, PLAN_55_RATE)
            + Money::at_rate(input.plans60, PLAN_60_RATE);
        let upgrade_commission = Money::at_rate(input.upgrades, UPGRADE_RATE);

        let total_gross_adds = input.total_gross_adds();
        let gross_add_percentage = percentage_of_goal(total_gross_adds, input.gross_add_goal);

        let performance_tier = PerformanceTier::for_percentage(gross_add_percentage);
        let performance_multiplier = performance_tier.multiplier(gross_add_percentage);

        // Either goal opens the gate.
        let goal_reached = gross_add_percentage >= BONUS_GATE_PERCENTAGE
            || input.accessories_value >= input.accessory_goal;
        let (auto_pay_commission, protect_commission) = if goal_reached {
            (
                Money::at_rate(input.auto_pay_enabled, AUTO_PAY_RATE),
                Money::at_rate(input.protect_enabled, PROTECT_RATE),
            )
        } else {
            (Money::ZERO, Money::ZERO)
        };

        let accessories_commission = Money::at_rate(input.accessories_value, ACCESSORIES_RATE);
        let ppp_commission = Money::at_rate(input.gross_adds_with_40_plus, PPP_ACTIVATION_RATE)
            + Money::at_rate(input.ppp_accessory_revenue, PPP_ACCESSORIES_RATE);
        let aia_commission = Money::at_rate(input.aia_count, AIA_RATE);

        let subtotal = [
            plan_commission,
            upgrade_commission,
            auto_pay_commission,
            protect_commission,
            accessories_commission,
            ppp_commission,
        ]
        .into_iter()
        .sum::<Money>();
        let total_commission = subtotal * performance_multiplier;

        CommissionResult {
            plan_commission,
            upgrade_commission,
            auto_pay_commission,
            protect_commission,
            accessories_commission,
            ppp_commission,
            aia_commission,
            subtotal,
            performance_multiplier,
            total_commission,
            total_gross_adds,
            gross_add_percentage,
            performance_tier,
            goal_reached,
        }
    }
}

/// `100 * achieved / goal`. A zero or negative goal counts as 0% achieved,
/// which keeps the result finite and in the no-payout tier. Results too large
/// for a `Decimal` saturate.
fn percentage_of_goal(achieved: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let saturated = if achieved.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };
    achieved
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(goal))
        .unwrap_or(saturated)
}
