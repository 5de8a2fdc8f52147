//! Read-only view of the active pricing catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /pricing -- tier prices and regions, for populating input forms.
pub async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.catalog.as_ref().clone(),
    })
}
