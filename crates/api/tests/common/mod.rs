#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pgmigrate_api::config::ServerConfig;
use pgmigrate_api::router::build_app_router;
use pgmigrate_api::state::AppState;
use pgmigrate_core::pricing::PricingCatalog;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        pricing_catalog_path: None,
    }
}

/// Build the full application router with the built-in catalog, using the
/// same middleware stack as production.
pub fn build_test_app() -> Router {
    build_test_app_with_catalog(PricingCatalog::builtin())
}

pub fn build_test_app_with_catalog(catalog: PricingCatalog) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Workload from the reference scenario: 500 GB, 4 cores, 32 GB RAM.
pub fn reference_workload() -> serde_json::Value {
    serde_json::json!({
        "db_size_gb": 500.0,
        "db_count": 5,
        "cpu_cores": 4,
        "ram_gb": 32.0,
        "storage_type": "ssd",
        "current_monthly_cost": 2000.0,
        "region": "eastus",
        "urgency": "standard"
    })
}
