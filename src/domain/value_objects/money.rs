//! Money Value Object
//!
//! Immutable monetary amount. The marketplace quotes in a single currency,
//! so only the amount is carried.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount in whole-or-fractional currency units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Create a new money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create money from whole currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a factor
    pub fn multiply(&self, factor: Decimal) -> Money {
        Money(self.0 * factor)
    }

    /// Round to the nearest whole currency unit, halves away from zero
    pub fn round_to_unit(&self) -> Money {
        Money(self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_units(280).to_string(), "$280");
    }

    #[test]
    fn test_money_multiply() {
        let high = Money::from_units(280).multiply(Decimal::new(15, 1));
        assert_eq!(high.amount(), Decimal::from(420));
        assert_eq!(high.to_string(), "$420");
    }

    #[test]
    fn test_round_to_unit_half_up() {
        let money = Money::new(Decimal::new(1265, 1)); // 126.5
        assert_eq!(money.round_to_unit().amount(), Decimal::from(127));
    }
}
