//! Markdown table renderer adapter.
//!
//! Renders plan benefits as GitHub-flavoured markdown tables with padded
//! columns, readable both raw in a terminal and rendered.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::domain::plan::{BenefitRow, PlanAttributes, PlanId};
use crate::ports::BenefitRenderer;

/// Markdown implementation of BenefitRenderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTableRenderer;

impl MarkdownTableRenderer {
    /// Creates a new markdown table renderer.
    pub fn new() -> Self {
        Self
    }

    fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
        let mut builder = Builder::default();
        builder.push_record(headers.iter().map(|h| h.to_string()));
        for row in rows {
            builder.push_record(row);
        }

        builder.build().with(Style::markdown()).to_string()
    }
}

impl BenefitRenderer for MarkdownTableRenderer {
    fn render_matrix(&self, rows: &[BenefitRow]) -> String {
        let headers = [
            PlanId::Basic.display_name(),
            PlanId::Standard.display_name(),
            PlanId::Premium.display_name(),
            "Services",
        ];

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.basic.to_string(),
                    row.standard.to_string(),
                    row.premium.to_string(),
                    row.service.to_string(),
                ]
            })
            .collect();

        Self::table(&headers, cells)
    }

    fn render_plan(&self, plan: &PlanAttributes) -> String {
        let headers = [plan.plan.display_name(), "Services"];

        let cells: Vec<Vec<String>> = plan
            .services()
            .into_iter()
            .map(|(service, value)| vec![value.to_string(), service.to_string()])
            .collect();

        Self::table(&headers, cells)
    }
}
