use std::sync::Arc;

use pgmigrate_core::pricing::PricingCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Pricing and region tables used by every cost estimate.
    pub catalog: Arc<PricingCatalog>,
}
