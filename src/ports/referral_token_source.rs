//! Referral token source port.
//!
//! Supplies the random part of freshly generated referral codes.

/// Port for producing referral tokens.
///
/// Each call returns [`REFERRAL_TOKEN_LENGTH`](crate::domain::subscriber::REFERRAL_TOKEN_LENGTH)
/// lowercase alphanumeric characters. Tokens need not be unique; callers
/// retry on collision.
pub trait ReferralTokenSource: Send + Sync {
    fn next_token(&self) -> String;
}
