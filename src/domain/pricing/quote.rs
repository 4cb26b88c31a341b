//! Quote value objects.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{Money, Percentage};
use crate::domain::plan::{PlanAttributes, PlanId};

/// How a price was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    /// The plan being priced.
    pub plan: PlanId,
    /// Catalog price before any discount.
    pub list_price: Money,
    /// Discount applied to the list price.
    pub discount: Percentage,
    /// Amount to pay.
    pub price: Money,
}

impl PriceBreakdown {
    /// Prices `plan` with `discount` taken off its list price.
    pub fn compute(plan: &PlanAttributes, discount: Percentage) -> Self {
        Self {
            plan: plan.plan,
            list_price: plan.price,
            discount,
            price: plan.price.apply_discount(discount),
        }
    }
}

/// Why a plan change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The requested plan is not strictly above the current one.
    DowngradeNotAllowed { current: PlanId, requested: PlanId },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::DowngradeNotAllowed { current, requested } => write!(
                f,
                "Only upgrades are allowed, not downgrades ({} -> {})",
                current, requested
            ),
        }
    }
}

/// Result of a pricing computation.
///
/// A rejection is an expected business outcome, not an error; callers must
/// handle both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Quote {
    Priced(PriceBreakdown),
    Rejected(RejectionReason),
}

impl Quote {
    /// Returns the amount to pay, if the quote was priced.
    pub fn price(&self) -> Option<Money> {
        match self {
            Quote::Priced(breakdown) => Some(breakdown.price),
            Quote::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Quote::Rejected(_))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Priced(breakdown) => write!(f, "{}", breakdown.price),
            Quote::Rejected(reason) => write!(f, "Error: {}", reason),
        }
    }
}
