//! Subscriber record.

use serde::{Deserialize, Serialize};

use super::ReferralCode;
use crate::domain::plan::PlanId;

/// A subscriber's current subscription.
///
/// Records are keyed by `username` (case-sensitive) in the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    /// The plan the subscriber currently pays for.
    pub plan: PlanId,
    /// Months subscribed so far.
    pub duration_months: u32,
    /// The subscriber's own code, handed out to friends.
    pub referral_code: ReferralCode,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        plan: PlanId,
        duration_months: u32,
        referral_code: ReferralCode,
    ) -> Self {
        Self {
            username: username.into(),
            plan,
            duration_months,
            referral_code,
        }
    }

    /// Creates the record committed by a new signup: always one month in.
    pub fn signup(username: impl Into<String>, plan: PlanId, referral_code: ReferralCode) -> Self {
        Self::new(username, plan, 1, referral_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_starts_at_one_month() {
        let code = ReferralCode::try_new("yusril-k3m9x0qa").unwrap();
        let record = UserRecord::signup("Yusril", PlanId::Premium, code);
        assert_eq!(record.duration_months, 1);
        assert_eq!(record.plan, PlanId::Premium);
    }

    #[test]
    fn deserializes_from_yaml_with_display_plan_name() {
        let yaml = "username: Cahya\n\
                    plan: Standard Plan\n\
                    duration_months: 24\n\
                    referral_code: cahya-abcd\n";
        let record: UserRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.username, "Cahya");
        assert_eq!(record.plan, PlanId::Standard);
        assert_eq!(record.duration_months, 24);
        assert_eq!(record.referral_code.as_str(), "cahya-abcd");
    }
}
