pub mod health;
pub mod proposal;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pricing                                         active catalog (GET)
///
/// /sizing                                          tier recommendation (POST)
/// /costs                                           cost comparison (POST)
/// /timeline                                        migration schedule (POST)
/// /proposals                                       full proposal (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/pricing", get(handlers::pricing::get_catalog))
        .merge(proposal::proposal_router())
}
