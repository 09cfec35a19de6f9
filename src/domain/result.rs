use crate::domain::money::Money;
use crate::domain::tier::PerformanceTier;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything derived from one `CommissionInput`, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResult {
    pub plan_commission: Money,
    pub upgrade_commission: Money,
    pub auto_pay_commission: Money,
    pub protect_commission: Money,
    pub accessories_commission: Money,
    pub ppp_commission: Money,
    /// Deferred incentive. Reported here but never part of `total_commission`.
    pub aia_commission: Money,
    /// Sum of every line above except the deferred incentive.
    pub subtotal: Money,
    pub performance_multiplier: Decimal,
    pub total_commission: Money,
    pub total_gross_adds: Decimal,
    pub gross_add_percentage: Decimal,
    pub performance_tier: PerformanceTier,
    /// Whether the bonus gate opened for the auto-pay and protect lines.
    pub goal_reached: bool,
}

impl CommissionResult {
    pub fn performance_tier_label(&self) -> &'static str {
        self.performance_tier.label()
    }
}
