//! Route definitions for the estimation pipeline.

use axum::routing::post;
use axum::Router;

use crate::handlers::proposal;
use crate::state::AppState;

/// Estimation routes, merged at the `/api/v1` root.
///
/// ```text
/// POST /sizing            -> recommend_sizing
/// POST /costs             -> estimate_costs
/// POST /timeline          -> estimate_timeline
/// POST /proposals         -> create_proposal
/// ```
pub fn proposal_router() -> Router<AppState> {
    Router::new()
        .route("/sizing", post(proposal::recommend_sizing))
        .route("/costs", post(proposal::estimate_costs))
        .route("/timeline", post(proposal::estimate_timeline))
        .route("/proposals", post(proposal::create_proposal))
}
