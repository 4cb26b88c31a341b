//! Seed data for the user directory.
//!
//! Seeds come either from the built-in demo dataset or from a YAML file
//! holding a list of records:
//!
//! ```yaml
//! - username: Cahya
//!   plan: Standard Plan
//!   duration_months: 24
//!   referral_code: cahya-abcd
//! ```

use std::path::Path;

use crate::config::DirectoryConfig;
use crate::domain::plan::PlanId;
use crate::domain::subscriber::{ReferralCode, UserRecord};
use crate::ports::DirectoryError;

/// The four subscribers of the demo dataset.
///
/// # Errors
/// Returns `DirectoryError::InvalidSeed` if a built-in record fails validation
pub fn demo_seed() -> Result<Vec<UserRecord>, DirectoryError> {
    [
        ("Shandy", PlanId::Basic, 12, "shandy-2134"),
        ("Cahya", PlanId::Standard, 24, "cahya-abcd"),
        ("Ana", PlanId::Premium, 5, "ana-2f9g"),
        ("Bagus", PlanId::Basic, 11, "bagus-9f92"),
    ]
    .into_iter()
    .map(|(username, plan, months, code)| {
        ReferralCode::try_new(code)
            .map(|code| UserRecord::new(username, plan, months, code))
            .map_err(|e| DirectoryError::InvalidSeed(e.to_string()))
    })
    .collect()
}

/// Load seed records from a YAML file.
///
/// # Errors
/// Returns `DirectoryError::InvalidSeed` if the file cannot be read or
/// does not hold a list of records
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<UserRecord>, DirectoryError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        DirectoryError::InvalidSeed(format!("failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<UserRecord> = serde_yaml::from_str(&content).map_err(|e| {
        DirectoryError::InvalidSeed(format!("failed to parse {}: {}", path.display(), e))
    })?;

    if let Some(bad) = records.iter().find(|r| r.username.is_empty()) {
        return Err(DirectoryError::InvalidSeed(format!(
            "record with referral code '{}' has an empty username",
            bad.referral_code
        )));
    }

    tracing::debug!("Loaded {} seed records from {}", records.len(), path.display());
    Ok(records)
}

/// Seed records selected by `config`: the demo users, if enabled, followed
/// by the seed file's records, if one is set.
///
/// # Errors
/// Returns `DirectoryError::InvalidSeed` if the seed file cannot be loaded
pub fn seed_records(config: &DirectoryConfig) -> Result<Vec<UserRecord>, DirectoryError> {
    let mut records = if config.seed_demo_users {
        demo_seed()?
    } else {
        Vec::new()
    };

    if let Some(path) = &config.seed_file {
        records.extend(load_seed_file(path)?);
    }

    Ok(records)
}
