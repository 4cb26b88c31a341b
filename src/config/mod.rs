//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PACFLIX` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use pacflix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log filter: {}", config.logging.filter);
//! ```

mod directory;
mod error;
mod logging;
mod referral;

pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use referral::ReferralConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// User directory seeding
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Referral code generation
    #[serde(default)]
    pub referral: ReferralConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PACFLIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PACFLIX__REFERRAL__MAX_GENERATION_ATTEMPTS=8` -> `referral.max_generation_attempts = 8`
    /// - `PACFLIX__DIRECTORY__SEED_FILE=./users.yaml` -> `directory.seed_file = ./users.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PACFLIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.directory.validate()?;
        self.referral.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "PACFLIX__DIRECTORY__SEED_FILE",
        "PACFLIX__DIRECTORY__SEED_DEMO_USERS",
        "PACFLIX__REFERRAL__MAX_GENERATION_ATTEMPTS",
        "PACFLIX__LOGGING__FILTER",
        "PACFLIX__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.directory.seed_demo_users);
        assert_eq!(config.referral.max_generation_attempts, 16);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PACFLIX__DIRECTORY__SEED_FILE", "./users.yaml");
        env::set_var("PACFLIX__DIRECTORY__SEED_DEMO_USERS", "false");
        env::set_var("PACFLIX__REFERRAL__MAX_GENERATION_ATTEMPTS", "4");
        env::set_var("PACFLIX__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.directory.seed_file, Some(PathBuf::from("./users.yaml")));
        assert!(!config.directory.seed_demo_users);
        assert_eq!(config.referral.max_generation_attempts, 4);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PACFLIX__REFERRAL__MAX_GENERATION_ATTEMPTS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidGenerationAttempts)
        );
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PACFLIX__REFERRAL__MAX_GENERATION_ATTEMPTS", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
