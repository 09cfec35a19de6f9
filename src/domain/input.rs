use crate::domain::money::saturating_add;
use crate::domain::rates::MAX_FIELD_VALUE;
use crate::error::CommissionError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the thirteen entry fields of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GrossAddGoal,
    AccessoryGoal,
    Plans30,
    Plans40,
    Plans55,
    Plans60,
    Upgrades,
    AutoPayEnabled,
    ProtectEnabled,
    AccessoriesValue,
    GrossAddsWith40Plus,
    PppAccessoryRevenue,
    AiaCount,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::GrossAddGoal,
        Field::AccessoryGoal,
        Field::Plans30,
        Field::Plans40,
        Field::Plans55,
        Field::Plans60,
        Field::Upgrades,
        Field::AutoPayEnabled,
        Field::ProtectEnabled,
        Field::AccessoriesValue,
        Field::GrossAddsWith40Plus,
        Field::PppAccessoryRevenue,
        Field::AiaCount,
    ];

    /// The camelCase name used in CSV headers, JSON and form commands.
    pub fn name(self) -> &'static str {
        match self {
            Field::GrossAddGoal => "grossAddGoal",
            Field::AccessoryGoal => "accessoryGoal",
            Field::Plans30 => "plans30",
            Field::Plans40 => "plans40",
            Field::Plans55 => "plans55",
            Field::Plans60 => "plans60",
            Field::Upgrades => "upgrades",
            Field::AutoPayEnabled => "autoPayEnabled",
            Field::ProtectEnabled => "protectEnabled",
            Field::AccessoriesValue => "accessoriesValue",
            Field::GrossAddsWith40Plus => "grossAddsWith40Plus",
            Field::PppAccessoryRevenue => "pppAccessoryRevenue",
            Field::AiaCount => "aiaCount",
        }
    }

    pub fn snake_name(self) -> &'static str {
        match self {
            Field::GrossAddGoal => "gross_add_goal",
            Field::AccessoryGoal => "accessory_goal",
            Field::Plans30 => "plans_30",
            Field::Plans40 => "plans_40",
            Field::Plans55 => "plans_55",
            Field::Plans60 => "plans_60",
            Field::Upgrades => "upgrades",
            Field::AutoPayEnabled => "auto_pay_enabled",
            Field::ProtectEnabled => "protect_enabled",
            Field::AccessoriesValue => "accessories_value",
            Field::GrossAddsWith40Plus => "gross_adds_with_40_plus",
            Field::PppAccessoryRevenue => "ppp_accessory_revenue",
            Field::AiaCount => "aia_count",
        }
    }

    /// Label shown next to the field on the entry form.
    pub fn label(self) -> &'static str {
        match self {
            Field::GrossAddGoal => "Gross Add Goal",
            Field::AccessoryGoal => "Accessory Goal ($)",
            Field::Plans30 => "$30 Plans",
            Field::Plans40 => "$40 Plans",
            Field::Plans55 => "$55 Plans",
            Field::Plans60 => "$60 Plans",
            Field::Upgrades => "Upgrades",
            Field::AutoPayEnabled => "Auto Pay",
            Field::ProtectEnabled => "Protect",
            Field::AccessoriesValue => "Accessory Revenue ($)",
            Field::GrossAddsWith40Plus => "PPP Activations $40+",
            Field::PppAccessoryRevenue => "PPP Accessory Rev ($)",
            Field::AiaCount => "AIA Count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s) || field.snake_name() == s)
            .ok_or_else(|| CommissionError::UnknownField(s.to_string()))
    }
}

/// Clamps a value into the accepted input range `[0, MAX_FIELD_VALUE]`.
pub fn clamp(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(MAX_FIELD_VALUE)
}

/// Turns free-form field text into an input value.
///
/// Blank or non-numeric text (including `NaN` and infinities) becomes zero,
/// negative numbers become zero and oversized numbers are capped. Plain
/// decimals, scientific notation and anything Rust parses as a finite `f64`
/// are accepted.
pub fn coerce(raw: &str) -> Decimal {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map(clamp)
        .unwrap_or_else(|_| raw.parse::<f64>().map(coerce_float).unwrap_or(Decimal::ZERO))
}

fn coerce_float(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    // Shortest round-trip text keeps 0.1 as 0.1 rather than its binary expansion.
    Decimal::from_str(&value.to_string())
        .map(clamp)
        .unwrap_or(MAX_FIELD_VALUE)
}

struct LenientNumberVisitor;

impl Visitor<'_> for LenientNumberVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or numeric text")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(coerce(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(clamp(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(clamp(Decimal::from(v)))
    }

    // Integers wider than 64 bits, e.g. a 20-digit CSV cell.
    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(Decimal::from_u128(v).map(clamp).unwrap_or(MAX_FIELD_VALUE))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        if v < 0 {
            return Ok(Decimal::ZERO);
        }
        Ok(Decimal::from_i128(v).map(clamp).unwrap_or(MAX_FIELD_VALUE))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(coerce_float(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(std::str::from_utf8(v).map(coerce).unwrap_or(Decimal::ZERO))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Decimal::ZERO)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientNumberVisitor)
}

/// One month of performance metrics as entered by the employee.
///
/// Every field is a non-negative number. Deserialization never fails on a
/// bad value: blank or non-numeric cells coerce to zero and missing fields
/// default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommissionInput {
    /// Target count of plan activations for the period.
    #[serde(alias = "gross_add_goal", deserialize_with = "lenient_number")]
    pub gross_add_goal: Decimal,
    /// Target dollar value of accessory sales.
    #[serde(alias = "accessory_goal", deserialize_with = "lenient_number")]
    pub accessory_goal: Decimal,
    #[serde(alias = "plans_30", deserialize_with = "lenient_number")]
    pub plans30: Decimal,
    #[serde(alias = "plans_40", deserialize_with = "lenient_number")]
    pub plans40: Decimal,
    #[serde(alias = "plans_55", deserialize_with = "lenient_number")]
    pub plans55: Decimal,
    #[serde(alias = "plans_60", deserialize_with = "lenient_number")]
    pub plans60: Decimal,
    #[serde(deserialize_with = "lenient_number")]
    pub upgrades: Decimal,
    #[serde(alias = "auto_pay_enabled", deserialize_with = "lenient_number")]
    pub auto_pay_enabled: Decimal,
    #[serde(alias = "protect_enabled", deserialize_with = "lenient_number")]
    pub protect_enabled: Decimal,
    /// Accessory revenue in dollars.
    #[serde(alias = "accessories_value", deserialize_with = "lenient_number")]
    pub accessories_value: Decimal,
    /// PPP activations on a $40 or higher plan.
    #[serde(
        rename = "grossAddsWith40Plus",
        alias = "gross_adds_with_40_plus",
        deserialize_with = "lenient_number"
    )]
    pub gross_adds_with_40_plus: Decimal,
    /// Accessory revenue sold under PPP, in dollars.
    #[serde(alias = "ppp_accessory_revenue", deserialize_with = "lenient_number")]
    pub ppp_accessory_revenue: Decimal,
    #[serde(alias = "aia_count", deserialize_with = "lenient_number")]
    pub aia_count: Decimal,
}

impl CommissionInput {
    /// An otherwise empty input carrying only the two period goals.
    pub fn with_goals(gross_add_goal: Decimal, accessory_goal: Decimal) -> Self {
        Self {
            gross_add_goal: clamp(gross_add_goal),
            accessory_goal: clamp(accessory_goal),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> Decimal {
        match field {
            Field::GrossAddGoal => self.gross_add_goal,
            Field::AccessoryGoal => self.accessory_goal,
            Field::Plans30 => self.plans30,
            Field::Plans40 => self.plans40,
            Field::Plans55 => self.plans55,
            Field::Plans60 => self.plans60,
            Field::Upgrades => self.upgrades,
            Field::AutoPayEnabled => self.auto_pay_enabled,
            Field::ProtectEnabled => self.protect_enabled,
            Field::AccessoriesValue => self.accessories_value,
            Field::GrossAddsWith40Plus => self.gross_adds_with_40_plus,
            Field::PppAccessoryRevenue => self.ppp_accessory_revenue,
            Field::AiaCount => self.aia_count,
        }
    }

    /// Stores `value`, clamped into the accepted input range.
    pub fn set(&mut self, field: Field, value: Decimal) {
        let value = clamp(value);
        let slot = match field {
            Field::GrossAddGoal => &mut self.gross_add_goal,
            Field::AccessoryGoal => &mut self.accessory_goal,
            Field::Plans30 => &mut self.plans30,
            Field::Plans40 => &mut self.plans40,
            Field::Plans55 => &mut self.plans55,
            Field::Plans60 => &mut self.plans60,
            Field::Upgrades => &mut self.upgrades,
            Field::AutoPayEnabled => &mut self.auto_pay_enabled,
            Field::ProtectEnabled => &mut self.protect_enabled,
            Field::AccessoriesValue => &mut self.accessories_value,
            Field::GrossAddsWith40Plus => &mut self.gross_adds_with_40_plus,
            Field::PppAccessoryRevenue => &mut self.ppp_accessory_revenue,
            Field::AiaCount => &mut self.aia_count,
        };
        *slot = value;
    }

    /// Coerces raw field text and stores the result.
    pub fn set_raw(&mut self, field: Field, raw: &str) {
        self.set(field, coerce(raw));
    }

    /// Activations across all four plan tiers, $30 plans included.
    pub fn total_gross_adds(&self) -> Decimal {
        [self.plans40, self.plans55, self.plans60]
            .into_iter()
            .fold(self.plans30, saturating_add)
    }
}
