//! Referral code value object.
//!
//! Every subscriber owns one referral code. Presenting another subscriber's
//! code when signing up grants a discount.
//!
//! Format: `<lowercased-username>-<token>` (e.g., `cahya-abcd`, `yusril-k3m9x0qa`).
//! Freshly generated codes carry an 8-character lowercase alphanumeric token;
//! older seeded codes may carry shorter ones.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Length of the random token in generated referral codes.
pub const REFERRAL_TOKEN_LENGTH: usize = 8;

/// A subscriber's referral code.
///
/// Codes are compared exactly; no normalization is applied to codes supplied
/// by callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralCode(String);

impl ReferralCode {
    /// Wraps an existing code string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the code is empty.
    pub fn try_new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("referral_code"));
        }
        Ok(Self(code))
    }

    /// Builds the referral code for `username` from a random token.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the token is not exactly
    /// [`REFERRAL_TOKEN_LENGTH`] lowercase alphanumeric characters.
    pub fn for_user(username: &str, token: &str) -> Result<Self, ValidationError> {
        if token.len() != REFERRAL_TOKEN_LENGTH {
            return Err(ValidationError::out_of_range(
                "referral_token_length",
                REFERRAL_TOKEN_LENGTH as i64,
                REFERRAL_TOKEN_LENGTH as i64,
                token.len() as i64,
            ));
        }

        if !token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                "referral_token",
                "lowercase alphanumeric characters only",
            ));
        }

        Ok(Self(format!("{}-{}", username.to_lowercase(), token)))
    }

    /// Returns the full code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ReferralCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_lowercases_username() {
        let code = ReferralCode::for_user("Yusril", "k3m9x0qa").unwrap();
        assert_eq!(code.as_str(), "yusril-k3m9x0qa");
    }

    #[test]
    fn for_user_rejects_short_token() {
        let result = ReferralCode::for_user("Yusril", "abcd");
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn for_user_rejects_uppercase_token() {
        let result = ReferralCode::for_user("Yusril", "ABCD1234");
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn for_user_rejects_symbols_in_token() {
        assert!(ReferralCode::for_user("Yusril", "abcd-123").is_err());
    }

    #[test]
    fn seeded_short_codes_are_accepted() {
        let code = ReferralCode::try_new("cahya-abcd").unwrap();
        assert_eq!(code.to_string(), "cahya-abcd");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert_eq!(
            ReferralCode::try_from("").unwrap_err(),
            ValidationError::empty_field("referral_code")
        );
    }

    #[test]
    fn codes_compare_exactly() {
        let lower = ReferralCode::try_new("cahya-abcd").unwrap();
        let upper = ReferralCode::try_new("CAHYA-ABCD").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ReferralCode::try_new("ana-2f9g").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ana-2f9g\"");
    }
}
