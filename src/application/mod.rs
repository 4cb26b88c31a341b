//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Upgrade quotes only read the directory; signup quotes write to it.

pub mod handlers;
mod pricing_engine;

pub use handlers::{
    GetPlanSummaryHandler, GetPlanSummaryQuery, PlanSummary, QuoteNewSignupCommand,
    QuoteNewSignupHandler, QuoteNewSignupResult, QuoteUpgradeCommand, QuoteUpgradeHandler,
    DEFAULT_MAX_GENERATION_ATTEMPTS,
};
pub use pricing_engine::PricingEngine;
