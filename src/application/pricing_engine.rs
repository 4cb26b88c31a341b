//! PricingEngine - Single entry point for plan pricing.
//!
//! Composes the existing-user and new-user handlers over one shared catalog
//! and directory, and takes plain strings the way a caller would type them.

use std::sync::Arc;

use super::handlers::{
    GetPlanSummaryHandler, GetPlanSummaryQuery, PlanSummary, QuoteNewSignupCommand,
    QuoteNewSignupHandler, QuoteNewSignupResult, QuoteUpgradeCommand, QuoteUpgradeHandler,
};
use crate::domain::plan::{BenefitRow, PlanCatalog};
use crate::domain::pricing::{PricingError, Quote};
use crate::ports::{ReferralTokenSource, UserDirectory};

/// Pricing facade over the plan catalog and user directory.
///
/// # Example
///
/// ```ignore
/// let engine = PricingEngine::new(directory, Arc::new(RandomTokenSource::new()));
///
/// let signup = engine.quote_new_signup("Yusril", "Premium Plan", Some("cahya-abcd"))?;
/// let upgrade = engine.quote_upgrade("Cahya", "Premium Plan")?;
/// ```
pub struct PricingEngine {
    catalog: &'static PlanCatalog,
    upgrade: QuoteUpgradeHandler,
    signup: QuoteNewSignupHandler,
    summary: GetPlanSummaryHandler,
}

impl PricingEngine {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        token_source: Arc<dyn ReferralTokenSource>,
    ) -> Self {
        let catalog = PlanCatalog::global();
        Self {
            catalog,
            upgrade: QuoteUpgradeHandler::new(catalog, directory.clone()),
            signup: QuoteNewSignupHandler::new(catalog, directory.clone(), token_source),
            summary: GetPlanSummaryHandler::new(catalog, directory),
        }
    }

    /// Sets how many referral codes a signup may generate before giving up.
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.signup = self.signup.with_max_generation_attempts(attempts);
        self
    }

    /// Quotes an upgrade for an existing subscriber. Never writes.
    pub fn quote_upgrade(&self, username: &str, new_plan: &str) -> Result<Quote, PricingError> {
        self.upgrade.handle(QuoteUpgradeCommand {
            username: username.to_string(),
            new_plan: new_plan.to_string(),
        })
    }

    /// Quotes a signup and commits the subscriber's new record.
    pub fn quote_new_signup(
        &self,
        username: &str,
        new_plan: &str,
        referral_code: Option<&str>,
    ) -> Result<QuoteNewSignupResult, PricingError> {
        self.signup.handle(QuoteNewSignupCommand {
            username: username.to_string(),
            new_plan: new_plan.to_string(),
            referral_code: referral_code.map(str::to_string),
        })
    }

    /// The subscriber's current plan and its benefits.
    pub fn plan_summary(&self, username: &str) -> Result<PlanSummary, PricingError> {
        self.summary.handle(GetPlanSummaryQuery {
            username: username.to_string(),
        })
    }

    /// Service-by-service comparison of all plans.
    pub fn benefit_matrix(&self) -> Vec<BenefitRow> {
        self.catalog.benefit_matrix()
    }
}
