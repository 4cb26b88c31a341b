//! Money value object in the smallest currency unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percentage;

/// An amount of Rupiah, counted in the smallest currency unit.
///
/// All arithmetic is integral; discounted amounts round half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns this amount with `discount` taken off, rounded half-up.
    pub fn apply_discount(&self, discount: Percentage) -> Self {
        let kept = u128::from(self.0) * u128::from(discount.complement().value());
        // kept / 100 never exceeds the original u64 amount
        Self(((kept + 50) / 100) as u64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp. {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_keeps_amount() {
        assert_eq!(Money::new(160_000).apply_discount(Percentage::ZERO), Money::new(160_000));
    }

    #[test]
    fn loyalty_discount_on_premium_is_exact() {
        let price = Money::new(200_000).apply_discount(Percentage::new(5));
        assert_eq!(price, Money::new(190_000));
    }

    #[test]
    fn referral_discount_on_premium_is_exact() {
        let price = Money::new(200_000).apply_discount(Percentage::new(4));
        assert_eq!(price, Money::new(192_000));
    }

    #[test]
    fn fractional_result_rounds_half_up() {
        // 10 * 0.95 = 9.5
        assert_eq!(Money::new(10).apply_discount(Percentage::new(5)), Money::new(10));
        // 1 * 0.96 = 0.96
        assert_eq!(Money::new(1).apply_discount(Percentage::new(4)), Money::new(1));
        // 11 * 0.96 = 10.56
        assert_eq!(Money::new(11).apply_discount(Percentage::new(4)), Money::new(11));
        // 21 * 0.96 = 20.16
        assert_eq!(Money::new(21).apply_discount(Percentage::new(4)), Money::new(20));
    }

    #[test]
    fn full_discount_is_free() {
        assert_eq!(Money::new(120_000).apply_discount(Percentage::HUNDRED), Money::ZERO);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let price = Money::new(u64::MAX).apply_discount(Percentage::ZERO);
        assert_eq!(price, Money::new(u64::MAX));
    }

    #[test]
    fn displays_with_currency_prefix() {
        assert_eq!(Money::new(192_000).to_string(), "Rp. 192000");
    }
}
