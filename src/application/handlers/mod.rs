//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod pricing;

pub use pricing::{
    GetPlanSummaryHandler, GetPlanSummaryQuery, PlanSummary, QuoteNewSignupCommand,
    QuoteNewSignupHandler, QuoteNewSignupResult, QuoteUpgradeCommand, QuoteUpgradeHandler,
    DEFAULT_MAX_GENERATION_ATTEMPTS,
};
