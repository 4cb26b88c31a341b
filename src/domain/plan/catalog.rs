//! The immutable plan catalog.

use once_cell::sync::Lazy;

use super::{BenefitRow, PlanAttributes, PlanError, PlanId, SERVICE_NAMES};

static CATALOG: Lazy<PlanCatalog> = Lazy::new(|| PlanCatalog {
    entries: PlanId::ALL.map(PlanAttributes::for_plan),
});

/// Fixed mapping from plan identifier to plan attributes.
///
/// There is exactly one catalog per process and it never changes; obtain it
/// with [`PlanCatalog::global`].
#[derive(Debug)]
pub struct PlanCatalog {
    /// Indexed by [`PlanId::ordinal`].
    entries: [PlanAttributes; 3],
}

impl PlanCatalog {
    /// Returns the process-wide catalog.
    pub fn global() -> &'static PlanCatalog {
        &CATALOG
    }

    /// Resolves a plan by name.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::UnknownPlan` if the name is not Basic, Standard or
    /// Premium (case-insensitive, optional " plan" suffix).
    pub fn lookup(&self, name: &str) -> Result<&PlanAttributes, PlanError> {
        let plan: PlanId = name.parse()?;
        Ok(self.get(plan))
    }

    /// Returns the attributes of a known plan.
    pub fn get(&self, plan: PlanId) -> &PlanAttributes {
        &self.entries[usize::from(plan.ordinal())]
    }

    /// Position of the plan in the upgrade order.
    pub fn ordinal(&self, plan: PlanId) -> u8 {
        plan.ordinal()
    }

    /// Iterates over all plans in ascending order.
    pub fn plans(&self) -> impl Iterator<Item = &PlanAttributes> {
        self.entries.iter()
    }

    /// Builds the side-by-side comparison of every service across all plans.
    ///
    /// Rows follow the service declaration order.
    pub fn benefit_matrix(&self) -> Vec<BenefitRow> {
        let [basic, standard, premium] = &self.entries;

        SERVICE_NAMES
            .into_iter()
            .zip(basic.services())
            .zip(standard.services())
            .zip(premium.services())
            .map(|(((service, (_, b)), (_, s)), (_, p))| BenefitRow {
                service,
                basic: b,
                standard: s,
                premium: p,
            })
            .collect()
    }
}
