//! User directory configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the user directory gets its initial subscribers.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// YAML file of additional subscribers, loaded after the demo users
    pub seed_file: Option<PathBuf>,

    /// Load the four built-in demo subscribers
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl DirectoryConfig {
    /// Validate directory configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.seed_file {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptySeedPath),
            _ => Ok(()),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

fn default_seed_demo_users() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_config_defaults() {
        let config = DirectoryConfig::default();
        assert!(config.seed_demo_users);
        assert!(config.seed_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_file_alone_is_valid() {
        let config = DirectoryConfig {
            seed_file: Some(PathBuf::from("users.yaml")),
            seed_demo_users: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_seed_path_rejected() {
        let config = DirectoryConfig {
            seed_file: Some(PathBuf::new()),
            seed_demo_users: true,
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptySeedPath));
    }
}
