//! Handlers for sizing, costing, timeline and full-proposal endpoints.
//!
//! Workload validation happens in the pure functions of `pgmigrate_core`;
//! handlers only check what the core cannot see (a caller-supplied
//! recommendation on `/costs`).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pgmigrate_core::cost::{self, CostReport};
use pgmigrate_core::proposal::{self, CustomerProfile};
use pgmigrate_core::sizing::{self, SizingRecommendation};
use pgmigrate_core::timeline;
use pgmigrate_core::workload::WorkloadInput;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body for `POST /costs`. When `recommendation` is omitted it is computed
/// from the workload.
#[derive(Debug, Deserialize)]
pub struct CostRequest {
    pub workload: WorkloadInput,
    pub recommendation: Option<SizingRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub recommendation: SizingRecommendation,
    pub costs: CostReport,
}

/// Body for `POST /proposals`.
#[derive(Debug, Deserialize)]
pub struct ProposalRequest {
    #[serde(default)]
    pub customer: CustomerProfile,
    pub workload: WorkloadInput,
}

// ---------------------------------------------------------------------------
// POST /sizing
// ---------------------------------------------------------------------------

/// Recommend a service tier and allocation for a workload.
pub async fn recommend_sizing(Json(workload): Json<WorkloadInput>) -> AppResult<impl IntoResponse> {
    let recommendation = sizing::recommend(&workload)?;

    tracing::debug!(
        tier = ?recommendation.tier,
        vcores = recommendation.vcores,
        allocated_ram_gb = recommendation.allocated_ram_gb,
        "Sizing recommended"
    );

    Ok(Json(DataResponse {
        data: recommendation,
    }))
}

// ---------------------------------------------------------------------------
// POST /costs
// ---------------------------------------------------------------------------

/// Price a recommendation against the workload's current spend.
pub async fn estimate_costs(
    State(state): State<AppState>,
    Json(body): Json<CostRequest>,
) -> AppResult<impl IntoResponse> {
    let recommendation = match body.recommendation {
        Some(mut rec) => {
            ensure_consistent(&rec)?;
            rec.tier_name = rec.tier.display_name().to_string();
            rec
        }
        None => sizing::recommend(&body.workload)?,
    };

    let costs = cost::estimate_cost(&body.workload, &recommendation, &state.catalog)?;

    tracing::debug!(
        region = %body.workload.region,
        azure_monthly = costs.azure.projection.monthly,
        monthly_savings = costs.savings.monthly,
        "Costs estimated"
    );

    Ok(Json(DataResponse {
        data: CostResponse {
            recommendation,
            costs,
        },
    }))
}

/// A caller-supplied recommendation must allocate whole vCores of its tier.
fn ensure_consistent(rec: &SizingRecommendation) -> Result<(), AppError> {
    let expected = rec.vcores.saturating_mul(rec.tier.ram_per_vcore());
    if rec.vcores > 0 && rec.allocated_ram_gb != expected {
        return Err(AppError::BadRequest(format!(
            "allocated_ram_gb {} does not match {} vCores of {} ({} GB)",
            rec.allocated_ram_gb,
            rec.vcores,
            rec.tier.display_name(),
            expected
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /timeline
// ---------------------------------------------------------------------------

/// Build the phased migration schedule for a workload.
pub async fn estimate_timeline(
    Json(workload): Json<WorkloadInput>,
) -> AppResult<impl IntoResponse> {
    let schedule = timeline::estimate_timeline(&workload)?;

    tracing::debug!(
        urgency = ?workload.urgency,
        total_weeks = schedule.total_weeks,
        "Timeline estimated"
    );

    Ok(Json(DataResponse { data: schedule }))
}

// ---------------------------------------------------------------------------
// POST /proposals
// ---------------------------------------------------------------------------

/// Run sizing, costing and scheduling and return the merged proposal.
pub async fn create_proposal(
    State(state): State<AppState>,
    Json(body): Json<ProposalRequest>,
) -> AppResult<impl IntoResponse> {
    let generated_at = chrono::Utc::now();
    let proposal =
        proposal::build_proposal(body.customer, body.workload, &state.catalog, generated_at)?;

    tracing::info!(
        company = %proposal.customer.company_name,
        tier = ?proposal.recommendation.tier,
        vcores = proposal.recommendation.vcores,
        azure_monthly = proposal.costs.azure.projection.monthly,
        total_weeks = proposal.timeline.total_weeks,
        "Proposal generated"
    );

    Ok(Json(DataResponse { data: proposal }))
}
