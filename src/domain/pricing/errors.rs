//! Pricing error types.
//!
//! Errors are caller-input problems surfaced immediately; none are retried.
//! A downgrade request is not an error: it yields a rejected
//! [`Quote`](super::Quote).
//!
//! # Error Code Mapping
//!
//! | Error | Code |
//! |-------|------|
//! | UnknownPlan | UNKNOWN_PLAN |
//! | UserNotFound | USER_NOT_FOUND |
//! | InvalidReferralCode | INVALID_REFERRAL_CODE |
//! | DuplicateReferralCode | DUPLICATE_REFERRAL_CODE |
//! | Infrastructure | INTERNAL_ERROR |

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::plan::PlanError;

/// Errors raised by pricing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Requested plan is not Basic, Standard or Premium.
    #[error("Unknown plan: '{0}'")]
    UnknownPlan(String),

    /// No subscriber with this username.
    #[error("User not found: '{0}'")]
    UserNotFound(String),

    /// Supplied referral code belongs to nobody.
    #[error("Referral code doesn't exist: '{0}'")]
    InvalidReferralCode(String),

    /// A referral code is already owned by another subscriber.
    #[error("Referral code '{code}' already belongs to '{owner}'")]
    DuplicateReferralCode { code: String, owner: String },

    /// Collaborator failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl PricingError {
    pub fn unknown_plan(name: impl Into<String>) -> Self {
        PricingError::UnknownPlan(name.into())
    }

    pub fn user_not_found(username: impl Into<String>) -> Self {
        PricingError::UserNotFound(username.into())
    }

    pub fn invalid_referral_code(code: impl Into<String>) -> Self {
        PricingError::InvalidReferralCode(code.into())
    }

    pub fn duplicate_referral_code(code: impl Into<String>, owner: impl Into<String>) -> Self {
        PricingError::DuplicateReferralCode {
            code: code.into(),
            owner: owner.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PricingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            PricingError::UserNotFound(_) => ErrorCode::UserNotFound,
            PricingError::InvalidReferralCode(_) => ErrorCode::InvalidReferralCode,
            PricingError::DuplicateReferralCode { .. } => ErrorCode::DuplicateReferralCode,
            PricingError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<PlanError> for PricingError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownPlan(name) => PricingError::UnknownPlan(name),
        }
    }
}
