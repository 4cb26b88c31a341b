//! Pricing handlers.
//!
//! ## Commands
//! - Quoting an upgrade for an existing subscriber (read-only)
//! - Quoting and committing a new signup
//!
//! ## Queries
//! - Get a subscriber's plan summary

mod get_plan_summary;
mod quote_new_signup;
mod quote_upgrade;

// Commands
pub use quote_new_signup::{
    QuoteNewSignupCommand, QuoteNewSignupHandler, QuoteNewSignupResult,
    DEFAULT_MAX_GENERATION_ATTEMPTS,
};
pub use quote_upgrade::{QuoteUpgradeCommand, QuoteUpgradeHandler};

// Queries
pub use get_plan_summary::{GetPlanSummaryHandler, GetPlanSummaryQuery, PlanSummary};
