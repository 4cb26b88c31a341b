//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, percentages, errors)
//! - `plan` - The fixed plan catalog and plan benefits
//! - `subscriber` - Subscriber records and referral codes
//! - `pricing` - Discount rules and quotes

pub mod foundation;
pub mod plan;
pub mod pricing;
pub mod subscriber;
