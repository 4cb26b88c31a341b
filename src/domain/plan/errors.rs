//! Plan catalog errors.

use thiserror::Error;

/// Errors raised when resolving plans from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The requested name is not one of Basic, Standard or Premium.
    #[error("Unknown plan: '{0}'")]
    UnknownPlan(String),
}

impl PlanError {
    pub fn unknown_plan(name: impl Into<String>) -> Self {
        PlanError::UnknownPlan(name.into())
    }
}
