use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A commission amount in currency units, kept at full precision.
///
/// Wraps `rust_decimal::Decimal` so commission lines cannot be mixed up with
/// counts or percentages. Rounding only happens at display time. Arithmetic
/// saturates at the `Decimal` bounds instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// `units` priced at `rate` each.
    pub fn at_rate(units: Decimal, rate: Decimal) -> Self {
        Self(saturating_mul(units, rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// `a + b`, clamped to `Decimal::MAX` or `Decimal::MIN` on overflow.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if a.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// `a * b`, clamped to `Decimal::MAX` or `Decimal::MIN` on overflow.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or(if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(saturating_add(self.0, rhs.0))
    }
}

// Scaling by a multiplier, e.g. the performance multiplier.
impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(saturating_mul(self.0, rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
