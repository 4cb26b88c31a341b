//! User Directory Port - Interface for subscriber record storage.
//!
//! The directory exclusively owns all subscriber records. Pricing handlers
//! read records through it and commit signups with [`UserDirectory::put`].

use crate::domain::pricing::PricingError;
use crate::domain::subscriber::{ReferralCode, UserRecord};

/// Errors that can occur during directory operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("User not found: '{0}'")]
    UserNotFound(String),

    #[error("Referral code '{code}' already belongs to '{owner}'")]
    DuplicateReferralCode { code: String, owner: String },

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

impl From<DirectoryError> for PricingError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::UserNotFound(username) => PricingError::UserNotFound(username),
            DirectoryError::DuplicateReferralCode { code, owner } => {
                PricingError::DuplicateReferralCode { code, owner }
            }
            DirectoryError::InvalidSeed(message) => PricingError::Infrastructure(message),
        }
    }
}

/// Port for looking up and storing subscriber records.
///
/// Implementations must serialize writes so that the referral-code
/// uniqueness check and the insert happen atomically.
pub trait UserDirectory: Send + Sync {
    /// Fetch the record for `username`.
    ///
    /// # Errors
    /// Returns `DirectoryError::UserNotFound` if no record exists
    fn get(&self, username: &str) -> Result<UserRecord, DirectoryError>;

    /// Insert or overwrite the record keyed by `record.username`.
    ///
    /// # Errors
    /// Returns `DirectoryError::DuplicateReferralCode` if the record's code
    /// already belongs to a different username
    fn put(&self, record: UserRecord) -> Result<(), DirectoryError>;

    /// Find the subscriber that owns `code`, if any.
    fn find_by_referral_code(&self, code: &ReferralCode) -> Option<UserRecord>;

    /// All records, ordered by username.
    fn list(&self) -> Vec<UserRecord>;
}
