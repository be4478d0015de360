//! HTTP-level tests through the axum router

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use pcb_tracker::repository::InMemoryTrackingRepository;
use pcb_tracker::tracking::UnitProcessStatus;
use tower::ServiceExt;

use common::{app, assigned, repository, scenario_catalog};

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_tracking_report_over_http() {
    let repository = repository(
        scenario_catalog(),
        vec![
            assigned("PCB-1", Some(3), "SN-1"),
            assigned("PCB-2", None, "SN-2"),
        ],
    );

    let (status, body) = get(app(repository), "/pcb-process-tracking").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first["assigned_pcb_id"], "PCB-1");
    assert_eq!(first["serial_no"], "SN-1");
    assert_eq!(first["current_step_id"], 3);
    assert_eq!(first["current_step_order"], 3);
    assert_eq!(first["current_step_name"], "AOI");
    assert_eq!(first["current_step_operators"][0]["operator_staff_no"], "S004");
    assert_eq!(first["current_step_operators"][0]["operator_MRL"], "MRL4");
    assert_eq!(first["previous_steps"][0]["step_name"], "SMT");
    assert_eq!(first["previous_steps"][1]["step_order"], 2);
    assert_eq!(first["next_steps"][0]["step_name"], "Test");

    let second = &records[1];
    assert!(second["current_step_id"].is_null());
    assert!(second["current_step_order"].is_null());
    assert_eq!(second["current_step_name"], "Unknown/Not Started");
    assert_eq!(second["previous_steps"], serde_json::json!([]));
    assert_eq!(second["next_steps"], serde_json::json!([]));
}

#[tokio::test]
async fn test_response_deserializes_into_records() {
    let repository = repository(scenario_catalog(), vec![assigned("PCB-9", Some(1), "SN-9")]);

    let (_, body) = get(app(repository), "/pcb-process-tracking").await;
    let records: Vec<UnitProcessStatus> = serde_json::from_value(body).unwrap();

    assert_eq!(records[0].unit_id, "PCB-9");
    assert!(records[0].previous_steps.is_empty());
    assert_eq!(records[0].next_steps.len(), 3);
}

#[tokio::test]
async fn test_empty_join_returns_empty_array() {
    let repository = repository(scenario_catalog(), vec![]);

    let (status, body) = get(app(repository), "/pcb-process-tracking").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_store_failure_returns_server_error() {
    let repository = Arc::new(InMemoryTrackingRepository::unavailable());

    let (status, body) = get(app(repository), "/pcb-process-tracking").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let repository = repository(scenario_catalog(), vec![]);

    let (status, body) = get(app(repository.clone()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(app(repository), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn test_readiness_fails_when_store_unreachable() {
    let repository = Arc::new(InMemoryTrackingRepository::unavailable());

    let (status, body) = get(app(repository.clone()), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");

    // Liveness does not depend on the store
    let (status, _) = get(app(repository), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let repository = repository(scenario_catalog(), vec![]);

    let (status, _) = get(app(repository), "/pcb-process-tracking/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
