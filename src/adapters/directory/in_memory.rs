//! In-Memory User Directory Adapter
//!
//! Stores subscriber records in memory. Starts from an explicit seed so
//! tests can supply isolated fixtures.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::subscriber::{ReferralCode, UserRecord};
use crate::ports::{DirectoryError, UserDirectory};

/// In-memory subscriber directory
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    records: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory preloaded with `seed`
    ///
    /// Later records overwrite earlier ones with the same username.
    ///
    /// # Errors
    /// Returns `DirectoryError::InvalidSeed` if two usernames share a
    /// referral code
    pub fn with_seed(seed: impl IntoIterator<Item = UserRecord>) -> Result<Self, DirectoryError> {
        let directory = Self::new();
        for record in seed {
            directory.put(record).map_err(|e| match e {
                DirectoryError::DuplicateReferralCode { code, owner } => {
                    DirectoryError::InvalidSeed(format!(
                        "referral code '{}' appears more than once (first owner '{}')",
                        code, owner
                    ))
                }
                other => other,
            })?;
        }
        Ok(directory)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never panic mid-update, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, UserRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, UserRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn get(&self, username: &str) -> Result<UserRecord, DirectoryError> {
        self.read()
            .get(username)
            .cloned()
            .ok_or_else(|| DirectoryError::UserNotFound(username.to_string()))
    }

    fn put(&self, record: UserRecord) -> Result<(), DirectoryError> {
        let mut records = self.write();

        if let Some(owner) = records
            .values()
            .find(|r| r.referral_code == record.referral_code && r.username != record.username)
        {
            return Err(DirectoryError::DuplicateReferralCode {
                code: record.referral_code.to_string(),
                owner: owner.username.clone(),
            });
        }

        records.insert(record.username.clone(), record);
        Ok(())
    }

    fn find_by_referral_code(&self, code: &ReferralCode) -> Option<UserRecord> {
        self.read()
            .values()
            .find(|r| &r.referral_code == code)
            .cloned()
    }

    fn list(&self) -> Vec<UserRecord> {
        let mut records: Vec<_> = self.read().values().cloned().collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanId;

    fn record(username: &str, plan: PlanId, months: u32, code: &str) -> UserRecord {
        UserRecord::new(username, plan, months, ReferralCode::try_new(code).unwrap())
    }

    #[test]
    fn get_returns_seeded_record() {
        let directory =
            InMemoryUserDirectory::with_seed([record("Cahya", PlanId::Standard, 24, "cahya-abcd")])
                .unwrap();

        let found = directory.get("Cahya").unwrap();
        assert_eq!(found.plan, PlanId::Standard);
        assert_eq!(found.duration_months, 24);
    }

    #[test]
    fn get_is_case_sensitive() {
        let directory =
            InMemoryUserDirectory::with_seed([record("Cahya", PlanId::Standard, 24, "cahya-abcd")])
                .unwrap();

        assert_eq!(
            directory.get("cahya"),
            Err(DirectoryError::UserNotFound("cahya".to_string()))
        );
    }

    #[test]
    fn put_inserts_new_record() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty());

        directory.put(record("Yusril", PlanId::Premium, 1, "yusril-k3m9x0qa")).unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("Yusril").unwrap().plan, PlanId::Premium);
    }

    #[test]
    fn put_overwrites_same_username() {
        let directory = InMemoryUserDirectory::new();
        directory.put(record("Yusril", PlanId::Premium, 1, "yusril-aaaaaaaa")).unwrap();
        directory.put(record("Yusril", PlanId::Standard, 1, "yusril-bbbbbbbb")).unwrap();

        let found = directory.get("Yusril").unwrap();
        assert_eq!(found.plan, PlanId::Standard);
        assert_eq!(found.referral_code.as_str(), "yusril-bbbbbbbb");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn put_may_keep_own_referral_code() {
        let directory = InMemoryUserDirectory::new();
        directory.put(record("Ana", PlanId::Basic, 5, "ana-2f9g")).unwrap();
        assert!(directory.put(record("Ana", PlanId::Premium, 6, "ana-2f9g")).is_ok());
    }

    #[test]
    fn put_rejects_code_owned_by_someone_else() {
        let directory = InMemoryUserDirectory::new();
        directory.put(record("Ana", PlanId::Premium, 5, "ana-2f9g")).unwrap();

        let result = directory.put(record("Bagus", PlanId::Basic, 11, "ana-2f9g"));

        assert_eq!(
            result,
            Err(DirectoryError::DuplicateReferralCode {
                code: "ana-2f9g".to_string(),
                owner: "Ana".to_string(),
            })
        );
        assert!(directory.get("Bagus").is_err());
    }

    #[test]
    fn seed_with_duplicate_codes_is_invalid() {
        let result = InMemoryUserDirectory::with_seed([
            record("Ana", PlanId::Premium, 5, "shared-code"),
            record("Bagus", PlanId::Basic, 11, "shared-code"),
        ]);
        assert!(matches!(result, Err(DirectoryError::InvalidSeed(_))));
    }

    #[test]
    fn find_by_referral_code_returns_owner() {
        let directory = InMemoryUserDirectory::with_seed([
            record("Ana", PlanId::Premium, 5, "ana-2f9g"),
            record("Bagus", PlanId::Basic, 11, "bagus-9f92"),
        ])
        .unwrap();

        let code = ReferralCode::try_new("bagus-9f92").unwrap();
        assert_eq!(directory.find_by_referral_code(&code).unwrap().username, "Bagus");

        let unknown = ReferralCode::try_new("nobody-0000").unwrap();
        assert!(directory.find_by_referral_code(&unknown).is_none());
    }

    #[test]
    fn list_is_sorted_by_username() {
        let directory = InMemoryUserDirectory::with_seed([
            record("Shandy", PlanId::Basic, 12, "shandy-2134"),
            record("Ana", PlanId::Premium, 5, "ana-2f9g"),
        ])
        .unwrap();

        let names: Vec<_> = directory.list().into_iter().map(|r| r.username).collect();
        assert_eq!(names, vec!["Ana", "Shandy"]);
    }

    #[test]
    fn clones_share_records() {
        let directory = InMemoryUserDirectory::new();
        let clone = directory.clone();
        clone.put(record("Ana", PlanId::Premium, 5, "ana-2f9g")).unwrap();
        assert!(directory.get("Ana").is_ok());
    }
}
