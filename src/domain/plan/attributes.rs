//! Per-plan benefits and pricing.
//!
//! Defines what each subscription plan includes and what it costs.

use serde::Serialize;
use std::fmt;

use super::PlanId;
use crate::domain::foundation::Money;

/// Service names in declaration order.
pub const SERVICE_NAMES: [&str; 8] = [
    "Can Stream",
    "Can Download",
    "SD Quality",
    "HD Quality",
    "UHD Quality",
    "Number of Devices",
    "Content Type",
    "Price",
];

/// Benefits and price of a single plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanAttributes {
    /// The plan these attributes describe.
    pub plan: PlanId,
    pub can_stream: bool,
    pub can_download: bool,
    pub sd_quality: bool,
    pub hd_quality: bool,
    pub uhd_quality: bool,
    /// Number of devices that may stream concurrently.
    pub device_limit: u32,
    /// Which catalogue of content the plan unlocks.
    pub content_description: &'static str,
    /// Monthly list price.
    pub price: Money,
}

impl PlanAttributes {
    /// Get the attributes for a specific plan.
    ///
    /// # Plan Configuration
    ///
    /// | Plan | SD | HD | UHD | Devices | Price |
    /// |------|----|----|-----|---------|-------|
    /// | Basic | Yes | No | No | 1 | 120000 |
    /// | Standard | Yes | Yes | No | 2 | 160000 |
    /// | Premium | Yes | Yes | Yes | 4 | 200000 |
    pub(crate) fn for_plan(plan: PlanId) -> Self {
        match plan {
            PlanId::Basic => Self {
                plan,
                can_stream: true,
                can_download: true,
                sd_quality: true,
                hd_quality: false,
                uhd_quality: false,
                device_limit: 1,
                content_description: "3rd Party Movie only",
                price: Money::new(120_000),
            },
            PlanId::Standard => Self {
                plan,
                can_stream: true,
                can_download: true,
                sd_quality: true,
                hd_quality: true,
                uhd_quality: false,
                device_limit: 2,
                content_description: "Basic Plan Content + Sport",
                price: Money::new(160_000),
            },
            PlanId::Premium => Self {
                plan,
                can_stream: true,
                can_download: true,
                sd_quality: true,
                hd_quality: true,
                uhd_quality: true,
                device_limit: 4,
                content_description: "Basic Plan + Standard Plan + PacFlix Original Series",
                price: Money::new(200_000),
            },
        }
    }

    /// Lists every service with this plan's value, in declaration order.
    pub fn services(&self) -> Vec<(&'static str, BenefitValue)> {
        let values = [
            BenefitValue::Flag(self.can_stream),
            BenefitValue::Flag(self.can_download),
            BenefitValue::Flag(self.sd_quality),
            BenefitValue::Flag(self.hd_quality),
            BenefitValue::Flag(self.uhd_quality),
            BenefitValue::Count(self.device_limit),
            BenefitValue::Text(self.content_description),
            BenefitValue::Price(self.price),
        ];

        SERVICE_NAMES.into_iter().zip(values).collect()
    }
}

/// The value a plan has for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BenefitValue {
    Flag(bool),
    Count(u32),
    Text(&'static str),
    Price(Money),
}

impl fmt::Display for BenefitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenefitValue::Flag(true) => write!(f, "True"),
            BenefitValue::Flag(false) => write!(f, "False"),
            BenefitValue::Count(n) => write!(f, "{}", n),
            BenefitValue::Text(text) => write!(f, "{}", text),
            BenefitValue::Price(price) => write!(f, "{}", price.amount()),
        }
    }
}

/// One line of the plan comparison: a service and its value on every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitRow {
    pub service: &'static str,
    pub basic: BenefitValue,
    pub standard: BenefitValue,
    pub premium: BenefitValue,
}
