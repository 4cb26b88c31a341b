//! Discount rules.
//!
//! Each rule is a pure function of explicit inputs so it can be tested on
//! its own; the handlers only combine the results.

use crate::domain::foundation::Percentage;

/// Subscribers with strictly more months than this get the loyalty discount.
pub const LOYALTY_THRESHOLD_MONTHS: u32 = 12;

/// Discount on upgrades for long-standing subscribers.
pub const LOYALTY_DISCOUNT: Percentage = Percentage::new(5);

/// Discount on signups that present an existing subscriber's referral code.
pub const REFERRAL_DISCOUNT: Percentage = Percentage::new(4);

/// Upgrade discount for a subscriber with `duration_months` of history.
///
/// Exactly twelve months does not qualify.
pub fn loyalty_discount(duration_months: u32) -> Percentage {
    if duration_months > LOYALTY_THRESHOLD_MONTHS {
        LOYALTY_DISCOUNT
    } else {
        Percentage::ZERO
    }
}

/// Signup discount, granted only when a valid referral code was presented.
pub fn referral_discount(has_valid_referral: bool) -> Percentage {
    if has_valid_referral {
        REFERRAL_DISCOUNT
    } else {
        Percentage::ZERO
    }
}
