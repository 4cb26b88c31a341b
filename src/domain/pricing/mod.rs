//! Pricing domain module.
//!
//! Discount rules and the quotes they produce.
//!
//! # Module Structure
//!
//! - `discount` - Loyalty and referral discount rules
//! - `quote` - Quote, PriceBreakdown and RejectionReason
//! - `errors` - PricingError taxonomy

mod discount;
mod errors;
mod quote;

pub use discount::{
    loyalty_discount, referral_discount, LOYALTY_DISCOUNT, LOYALTY_THRESHOLD_MONTHS,
    REFERRAL_DISCOUNT,
};
pub use errors::PricingError;
pub use quote::{PriceBreakdown, Quote, RejectionReason};
