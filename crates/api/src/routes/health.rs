use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// `"file"` when a catalog was loaded from `PRICING_CATALOG_PATH`,
    /// `"builtin"` otherwise.
    pub pricing_catalog: &'static str,
    /// Number of regions the active catalog prices.
    pub regions: usize,
}

/// GET /health -- the service holds no external connections, so being able
/// to answer is the whole check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let pricing_catalog = if state.config.pricing_catalog_path.is_some() {
        "file"
    } else {
        "builtin"
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pricing_catalog,
        regions: state.catalog.regions.len(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
