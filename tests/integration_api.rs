//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use chargepoint_sim::api::{AppState, router};

fn build_api_state() -> Arc<AppState> {
    Arc::new(AppState {
        run_timeout: Duration::from_secs(30),
        max_charge_points: 100,
    })
}

async fn post_json(body: &'static str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let req = Request::builder()
        .method("POST")
        .uri("/simulate")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn seeded_requests_are_reproducible() {
    let body = r#"{"numChargePoints": 4, "arrivalProbabilityMultiplier": 150, "seed": 7}"#;
    let (status_a, a) = post_json(body).await;
    let (status_b, b) = post_json(body).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    for key in [
        "totalEnergyKWh",
        "actualMaxPower",
        "concurrencyFactor",
        "chargingValues",
        "chargingEventsPerYear",
    ] {
        assert_eq!(a[key], b[key], "{key} differs between identical seeded runs");
    }
}

#[tokio::test]
async fn legacy_field_names_are_accepted() {
    let (status, json) = post_json(
        r#"{"numChargePoints": 3, "arrivalProbabilityMult": 100, "carConsumption": 20, "chargingPower": 22}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["theoreticalMaxPower"], 66.0);
    assert!(json["seed"].is_u64());
}

#[tokio::test]
async fn result_has_boundary_shape() {
    let (status, json) = post_json(r#"{"numChargePoints": 10, "seed": 1}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["theoreticalMaxPower"], 110.0);
    assert_eq!(json["chargingValues"].as_array().map(Vec::len), Some(96));
    let factor = json["concurrencyFactor"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&factor));
    assert!(json["exemplaryDay"].is_string());
}

#[tokio::test]
async fn invalid_parameters_return_400() {
    for body in [
        r#"{}"#,
        r#"{"numChargePoints": 2.5}"#,
        r#"{"numChargePoints": 2, "chargingPowerKW": -1}"#,
        r#"{"numChargePoints": 2, "carConsumptionKWhPer100Km": 0}"#,
        r#"{"numChargePoints": 2, "arrivalProbabilityMultiplier": -5}"#,
        r#"{"numChargePoints": 101}"#,
        r#"{"numChargePoints": 4294967296}"#,
    ] {
        let (status, json) = post_json(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(json["error"].is_string(), "{body}");
    }
}
