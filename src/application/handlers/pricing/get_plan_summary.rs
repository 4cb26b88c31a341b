//! GetPlanSummaryHandler - Query handler for a subscriber's current plan.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::plan::{PlanAttributes, PlanCatalog};
use crate::domain::pricing::PricingError;
use crate::domain::subscriber::ReferralCode;
use crate::ports::UserDirectory;

/// Query for a subscriber's plan.
#[derive(Debug, Clone)]
pub struct GetPlanSummaryQuery {
    pub username: String,
}

/// A subscriber's plan with its full benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub username: String,
    pub plan: PlanAttributes,
    pub duration_months: u32,
    pub referral_code: ReferralCode,
}

/// Handler for plan summaries.
pub struct GetPlanSummaryHandler {
    catalog: &'static PlanCatalog,
    directory: Arc<dyn UserDirectory>,
}

impl GetPlanSummaryHandler {
    pub fn new(catalog: &'static PlanCatalog, directory: Arc<dyn UserDirectory>) -> Self {
        Self { catalog, directory }
    }

    pub fn handle(&self, query: GetPlanSummaryQuery) -> Result<PlanSummary, PricingError> {
        let record = self.directory.get(&query.username)?;

        Ok(PlanSummary {
            plan: self.catalog.get(record.plan).clone(),
            username: record.username,
            duration_months: record.duration_months,
            referral_code: record.referral_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::{demo_seed, InMemoryUserDirectory};
    use crate::domain::plan::PlanId;

    fn handler() -> GetPlanSummaryHandler {
        let directory = InMemoryUserDirectory::with_seed(demo_seed().unwrap()).unwrap();
        GetPlanSummaryHandler::new(PlanCatalog::global(), Arc::new(directory))
    }

    #[test]
    fn summary_includes_plan_benefits() {
        let summary = handler()
            .handle(GetPlanSummaryQuery {
                username: "Cahya".to_string(),
            })
            .unwrap();

        assert_eq!(summary.plan.plan, PlanId::Standard);
        assert_eq!(summary.plan.device_limit, 2);
        assert_eq!(summary.duration_months, 24);
        assert_eq!(summary.referral_code.as_str(), "cahya-abcd");
    }

    #[test]
    fn unknown_user_is_an_error() {
        let result = handler().handle(GetPlanSummaryQuery {
            username: "Ghost".to_string(),
        });
        assert_eq!(result, Err(PricingError::user_not_found("Ghost")));
    }
}
