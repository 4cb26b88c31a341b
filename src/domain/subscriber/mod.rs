//! Subscriber domain module.
//!
//! Subscriber records and the referral codes they carry.

mod record;
mod referral_code;

pub use record::UserRecord;
pub use referral_code::{ReferralCode, REFERRAL_TOKEN_LENGTH};
