//! Benefit renderer port.
//!
//! Presentation of plan benefits for humans. The pricing core only hands
//! over data; formatting is entirely up to the implementation.

use crate::domain::plan::{BenefitRow, PlanAttributes};

/// Port for rendering plan benefits as text.
pub trait BenefitRenderer: Send + Sync {
    /// Render the comparison of every service across all plans.
    fn render_matrix(&self, rows: &[BenefitRow]) -> String;

    /// Render the services of a single plan.
    fn render_plan(&self, plan: &PlanAttributes) -> String;
}
