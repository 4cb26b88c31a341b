//! Plan domain module.
//!
//! The fixed catalog of subscription plans and their benefits.
//!
//! # Module Structure
//!
//! - `plan_id` - PlanId tiers and their upgrade order
//! - `attributes` - Benefits and price per plan
//! - `catalog` - The immutable, process-wide PlanCatalog
//! - `errors` - Plan resolution errors

mod attributes;
mod catalog;
mod errors;
mod plan_id;

pub use attributes::{BenefitRow, BenefitValue, PlanAttributes, SERVICE_NAMES};
pub use catalog::PlanCatalog;
pub use errors::PlanError;
pub use plan_id::PlanId;
