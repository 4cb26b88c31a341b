//! Plan identifiers.
//!
//! Represents the three subscription tiers offered by PacFlix.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PlanError;

/// Subscription plan identifier.
///
/// Plans are totally ordered `Basic < Standard < Premium`; the order decides
/// whether a plan change counts as an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    /// SD streaming on a single device.
    #[serde(alias = "Basic Plan", alias = "basic plan")]
    Basic,

    /// HD streaming on two devices, adds sport.
    #[serde(alias = "Standard Plan", alias = "standard plan")]
    Standard,

    /// UHD streaming on four devices, adds original series.
    #[serde(alias = "Premium Plan", alias = "premium plan")]
    Premium,
}

impl PlanId {
    /// All plans in ascending order.
    pub const ALL: [PlanId; 3] = [PlanId::Basic, PlanId::Standard, PlanId::Premium];

    /// Returns the display name for this plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanId::Basic => "Basic Plan",
            PlanId::Standard => "Standard Plan",
            PlanId::Premium => "Premium Plan",
        }
    }

    /// Returns the position of this plan in the upgrade order.
    ///
    /// Higher ordinal = more features. Used for upgrade validation.
    pub fn ordinal(&self) -> u8 {
        match self {
            PlanId::Basic => 0,
            PlanId::Standard => 1,
            PlanId::Premium => 2,
        }
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PlanId {
    type Err = PlanError;

    /// Matches plan names case-insensitively, with or without the
    /// trailing " plan" (`"premium"`, `"Premium Plan"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let tier = normalized
            .strip_suffix(" plan")
            .unwrap_or(&normalized)
            .trim_end();

        match tier {
            "basic" => Ok(PlanId::Basic),
            "standard" => Ok(PlanId::Standard),
            "premium" => Ok(PlanId::Premium),
            _ => Err(PlanError::unknown_plan(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_ordered_basic_standard_premium() {
        assert!(PlanId::Basic < PlanId::Standard);
        assert!(PlanId::Standard < PlanId::Premium);
        assert_eq!(PlanId::Basic.ordinal(), 0);
        assert_eq!(PlanId::Premium.ordinal(), 2);
    }

    #[test]
    fn display_names_are_correct() {
        assert_eq!(PlanId::Basic.display_name(), "Basic Plan");
        assert_eq!(PlanId::Standard.display_name(), "Standard Plan");
        assert_eq!(PlanId::Premium.display_name(), "Premium Plan");
    }

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!("Premium Plan".parse::<PlanId>().unwrap(), PlanId::Premium);
        assert_eq!("standard plan".parse::<PlanId>().unwrap(), PlanId::Standard);
        assert_eq!("BASIC".parse::<PlanId>().unwrap(), PlanId::Basic);
        assert_eq!("  basic  ".parse::<PlanId>().unwrap(), PlanId::Basic);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Platinum Plan".parse::<PlanId>().unwrap_err();
        assert_eq!(err, PlanError::unknown_plan("Platinum Plan"));
        assert!("".parse::<PlanId>().is_err());
        assert!("plan".parse::<PlanId>().is_err());
    }

    #[test]
    fn plan_serializes_lowercase() {
        let json = serde_json::to_string(&PlanId::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
    }

    #[test]
    fn plan_deserializes_from_display_name() {
        let plan: PlanId = serde_json::from_str("\"Premium Plan\"").unwrap();
        assert_eq!(plan, PlanId::Premium);
    }
}
