//! HTTP-level integration tests for the sizing, costing, timeline, proposal
//! and pricing endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_catalog, get, post_json, reference_workload,
};
use pgmigrate_core::pricing::PricingCatalog;
use serde_json::json;

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().expect("expected a number") - expected).abs() < 1e-6
}

// ---------------------------------------------------------------------------
// POST /api/v1/sizing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sizing_recommends_general_purpose_for_reference_workload() {
    let response = post_json(build_test_app(), "/api/v1/sizing", reference_workload()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["tier"], "general_purpose");
    assert_eq!(data["tier_name"], "General Purpose");
    assert_eq!(data["vcores"], 8);
    assert_eq!(data["allocated_ram_gb"], 32);
    assert_eq!(data["storage_gb"], 600);
    assert_eq!(data["backup_gb"], 150);
    assert_eq!(data["ha_enabled"], true);
    assert_eq!(data["backup_retention_days"], 7);
}

#[tokio::test]
async fn sizing_rejects_zero_cpu_cores() {
    let mut workload = reference_workload();
    workload["cpu_cores"] = json!(0);

    let response = post_json(build_test_app(), "/api/v1/sizing", workload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn sizing_rejects_negative_database_size() {
    let mut workload = reference_workload();
    workload["db_size_gb"] = json!(-10.0);

    let response = post_json(build_test_app(), "/api/v1/sizing", workload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// POST /api/v1/costs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn costs_compute_recommendation_when_omitted() {
    let response = post_json(
        build_test_app(),
        "/api/v1/costs",
        json!({ "workload": reference_workload() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["recommendation"]["vcores"], 8);

    let monthly = 8.0 * 73.73 + 600.0 * 0.115 + 150.0 * 0.095;
    assert!(approx(&data["costs"]["azure"]["monthly"], monthly));
    assert!(approx(&data["costs"]["azure"]["annual"], monthly * 12.0));
    assert!(approx(&data["costs"]["current"]["three_year"], 2000.0 * 36.0));
    assert!(approx(&data["costs"]["savings"]["monthly"], 2000.0 - monthly));
}

#[tokio::test]
async fn costs_accept_supplied_recommendation() {
    let body = json!({
        "workload": reference_workload(),
        "recommendation": {
            "tier": "memory_optimized",
            "vcores": 4,
            "requested_ram_gb": 32.0,
            "allocated_ram_gb": 32,
            "storage_gb": 600,
            "backup_gb": 150,
            "ha_enabled": true,
            "backup_retention_days": 7
        }
    });

    let response = post_json(build_test_app(), "/api/v1/costs", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["recommendation"]["tier_name"], "Memory Optimized");
    assert!(approx(
        &json["data"]["costs"]["azure"]["breakdown"]["compute"],
        4.0 * 147.46
    ));
}

#[tokio::test]
async fn costs_reject_inconsistent_recommendation() {
    let body = json!({
        "workload": reference_workload(),
        "recommendation": {
            "tier": "general_purpose",
            "vcores": 2,
            "requested_ram_gb": 32.0,
            "allocated_ram_gb": 32,
            "storage_gb": 600,
            "backup_gb": 150,
            "ha_enabled": true,
            "backup_retention_days": 7
        }
    });

    let response = post_json(build_test_app(), "/api/v1/costs", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn costs_with_no_current_spend_report_zero_percentage() {
    let mut workload = reference_workload();
    workload["current_monthly_cost"] = json!(0.0);

    let response =
        post_json(build_test_app(), "/api/v1/costs", json!({ "workload": workload })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["costs"]["savings"]["percentage"], 0.0);
}

#[tokio::test]
async fn costs_use_loaded_catalog() {
    let mut catalog = PricingCatalog::builtin();
    catalog.tiers.general_purpose.vcore_price = 100.0;
    catalog.tiers.general_purpose.storage_price_per_gb = 0.0;
    catalog.tiers.general_purpose.backup_price_per_gb = 0.0;

    let response = post_json(
        build_test_app_with_catalog(catalog),
        "/api/v1/costs",
        json!({ "workload": reference_workload() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(approx(&json["data"]["costs"]["azure"]["monthly"], 800.0));
}

// ---------------------------------------------------------------------------
// POST /api/v1/timeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeline_for_large_estate() {
    let mut workload = reference_workload();
    workload["db_size_gb"] = json!(1500.0);
    workload["db_count"] = json!(15);

    let response = post_json(build_test_app(), "/api/v1/timeline", workload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["total_weeks"], 17);
    assert_eq!(data["total_months"], 5);

    let phases = data["phases"].as_array().expect("phases should be an array");
    assert_eq!(phases.len(), 5);
    assert_eq!(phases[0]["phase"], "assessment");
    assert_eq!(phases[2]["phase"], "data");
    assert_eq!(phases[2]["weeks"], 7);
    assert_eq!(phases[2]["start_week"], 6);
    assert_eq!(phases[2]["end_week"], 12);
    assert_eq!(phases[4]["name"], "Cutover & Go-Live");
}

#[tokio::test]
async fn timeline_treats_unknown_urgency_as_standard() {
    for urgency in [json!("yesterday"), json!(""), json!(null)] {
        let mut workload = reference_workload();
        workload["urgency"] = urgency;

        let response = post_json(build_test_app(), "/api/v1/timeline", workload).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["total_weeks"], 12);
    }
}

// ---------------------------------------------------------------------------
// POST /api/v1/proposals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proposal_merges_pipeline_results() {
    let mut workload = reference_workload();
    workload["region"] = json!("northeurope");

    let response = post_json(
        build_test_app(),
        "/api/v1/proposals",
        json!({
            "customer": { "company_name": "Contoso", "industry": "Finance" },
            "workload": workload
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["customer"]["company_name"], "Contoso");
    assert_eq!(data["region_name"], "North Europe");
    assert_eq!(data["current_cost_provided"], true);
    assert_eq!(data["recommendation"]["tier"], "general_purpose");
    assert!(approx(&data["costs"]["region_multiplier"], 1.02));
    assert_eq!(data["timeline"]["total_weeks"], 12);
    assert_eq!(data["outlook"]["kind"], "savings");
    assert_eq!(data["storage_label"], "SSD");
    assert!(data["generated_at"].is_string());
}

#[tokio::test]
async fn proposal_without_customer_or_spend_is_investment() {
    let mut workload = reference_workload();
    workload["current_monthly_cost"] = json!(0.0);

    let response = post_json(
        build_test_app(),
        "/api/v1/proposals",
        json!({ "workload": workload }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["customer"]["company_name"], "");
    assert_eq!(data["current_cost_provided"], false);
    assert_eq!(data["outlook"]["kind"], "investment");
}

#[tokio::test]
async fn proposal_echoes_unlisted_storage_type() {
    let mut workload = reference_workload();
    workload["storage_type"] = json!("ceph");

    let response = post_json(
        build_test_app(),
        "/api/v1/proposals",
        json!({ "workload": workload }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["workload"]["storage_type"], "ceph");
    assert_eq!(json["data"]["storage_label"], "CEPH");
}

#[tokio::test]
async fn proposal_rejects_zero_databases() {
    let mut workload = reference_workload();
    workload["db_count"] = json!(0);

    let response = post_json(
        build_test_app(),
        "/api/v1/proposals",
        json!({ "workload": workload }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /api/v1/pricing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pricing_lists_builtin_catalog() {
    let response = get(build_test_app(), "/api/v1/pricing").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(approx(&data["tiers"]["burstable"]["vcore_price"], 24.82));

    let regions = data["regions"].as_array().expect("regions should be an array");
    assert_eq!(regions.len(), 9);
    assert!(regions
        .iter()
        .any(|r| r["key"] == "southeastasia" && r["display_name"] == "Southeast Asia"));
}
