//! Referral code configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::DEFAULT_MAX_GENERATION_ATTEMPTS;

/// Referral code generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReferralConfig {
    /// Codes generated per signup before reporting a duplicate
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
}

impl ReferralConfig {
    /// Validate referral configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_generation_attempts == 0 {
            return Err(ValidationError::InvalidGenerationAttempts);
        }
        Ok(())
    }
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            max_generation_attempts: default_max_generation_attempts(),
        }
    }
}

fn default_max_generation_attempts() -> u32 {
    DEFAULT_MAX_GENERATION_ATTEMPTS
}
