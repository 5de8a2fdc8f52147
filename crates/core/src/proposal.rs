//! Merged migration proposal handed to the presentation layer.
//!
//! Runs sizing, costing and scheduling for one workload and adds the few
//! derived facts the report needs (region name, savings outlook).

use serde::{Deserialize, Serialize};

use crate::cost::{estimate_cost, CostReport};
use crate::error::CoreError;
use crate::pricing::PricingCatalog;
use crate::sizing::{recommend, SizingRecommendation};
use crate::timeline::{estimate_timeline, MigrationTimeline};
use crate::types::{Money, Timestamp};
use crate::workload::WorkloadInput;

/// Who the proposal is for. Both fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
}

/// Whether migrating lowers monthly spend or requires additional investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavingsOutlook {
    /// Azure is cheaper by `monthly` per month (`percentage` of current spend).
    Savings { monthly: Money, percentage: f64 },
    /// Azure costs `monthly` more per month than today (or no current cost
    /// was supplied).
    Investment { monthly: Money },
}

impl SavingsOutlook {
    pub fn from_report(costs: &CostReport) -> Self {
        if costs.savings.monthly > 0.0 {
            Self::Savings {
                monthly: costs.savings.monthly,
                percentage: costs.savings.percentage,
            }
        } else {
            Self::Investment {
                monthly: costs.savings.monthly.abs(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    pub customer: CustomerProfile,
    pub workload: WorkloadInput,
    pub region_name: String,
    pub storage_label: String,
    /// False when the workload's current monthly cost was `0` ("not provided").
    pub current_cost_provided: bool,
    pub recommendation: SizingRecommendation,
    pub costs: CostReport,
    pub timeline: MigrationTimeline,
    pub outlook: SavingsOutlook,
    pub generated_at: Timestamp,
}

/// Run the full pipeline for one workload.
///
/// `generated_at` is supplied by the caller so identical inputs always
/// produce identical proposals.
pub fn build_proposal(
    customer: CustomerProfile,
    workload: WorkloadInput,
    catalog: &PricingCatalog,
    generated_at: Timestamp,
) -> Result<Proposal, CoreError> {
    let recommendation = recommend(&workload)?;
    let costs = estimate_cost(&workload, &recommendation, catalog)?;
    let timeline = estimate_timeline(&workload)?;

    Ok(Proposal {
        region_name: catalog.region_display_name(&workload.region).to_string(),
        storage_label: workload.storage_type.label(),
        current_cost_provided: workload.has_current_cost(),
        outlook: SavingsOutlook::from_report(&costs),
        customer,
        workload,
        recommendation,
        costs,
        timeline,
        generated_at,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
