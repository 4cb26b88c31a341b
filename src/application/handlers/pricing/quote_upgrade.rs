//! QuoteUpgradeHandler - Prices a plan upgrade for an existing subscriber.
//!
//! This is the existing-user context: it only ever reads the directory.
//! An upgrade quote is not an enactment; the subscriber's record keeps its
//! current plan.

use std::sync::Arc;

use tracing::debug;

use crate::domain::plan::PlanCatalog;
use crate::domain::pricing::{
    loyalty_discount, PriceBreakdown, PricingError, Quote, RejectionReason,
};
use crate::ports::UserDirectory;

/// Command to quote an upgrade.
#[derive(Debug, Clone)]
pub struct QuoteUpgradeCommand {
    pub username: String,
    /// Requested plan name, e.g. "Premium Plan".
    pub new_plan: String,
}

/// Handler for upgrade quotes.
pub struct QuoteUpgradeHandler {
    catalog: &'static PlanCatalog,
    directory: Arc<dyn UserDirectory>,
}

impl QuoteUpgradeHandler {
    pub fn new(catalog: &'static PlanCatalog, directory: Arc<dyn UserDirectory>) -> Self {
        Self { catalog, directory }
    }

    /// Quotes moving `cmd.username` to `cmd.new_plan`.
    ///
    /// Requests for the same or a lower plan come back as
    /// `Quote::Rejected(DowngradeNotAllowed)`.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the subscriber does not exist
    /// - `UnknownPlan` if the plan name is not recognised
    pub fn handle(&self, cmd: QuoteUpgradeCommand) -> Result<Quote, PricingError> {
        // 1. Fetch the subscriber's current record
        let record = self.directory.get(&cmd.username)?;

        // 2. Resolve the requested plan
        let target = self.catalog.lookup(&cmd.new_plan)?;

        // 3. Only strict upgrades are priced
        if self.catalog.ordinal(record.plan) >= self.catalog.ordinal(target.plan) {
            debug!(
                "Rejected plan change for {}: {} -> {}",
                record.username, record.plan, target.plan
            );
            return Ok(Quote::Rejected(RejectionReason::DowngradeNotAllowed {
                current: record.plan,
                requested: target.plan,
            }));
        }

        // 4. Apply the loyalty discount
        let discount = loyalty_discount(record.duration_months);
        let breakdown = PriceBreakdown::compute(target, discount);

        debug!(
            username = %record.username,
            months = record.duration_months,
            discount = %discount,
            price = %breakdown.price,
            "Quoted upgrade {} -> {}",
            record.plan,
            target.plan
        );

        Ok(Quote::Priced(breakdown))
    }
}
