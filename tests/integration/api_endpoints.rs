//! Ambient API surface
//!
//! Health endpoint and the exposition endpoint before any check has run.

use crate::helpers::*;
use axum::http::StatusCode;
use serde_json::Value;
use wiremock::MockServer;

#[tokio::test]
async fn test_health_endpoint() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;

    let (addr, _metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_metrics_endpoint_before_any_check() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;

    let (addr, _metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.unwrap();
    // Gauge is registered (and zero) before the first successful check.
    assert!(body.contains("centinela_anomaly_verdict 0"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;

    let (addr, _metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
