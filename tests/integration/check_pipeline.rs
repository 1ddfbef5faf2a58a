//! End-to-end checks over mock upstreams
//!
//! These tests verify the whole metric-to-verdict pipeline: collection,
//! snapshot assembly, inference, verdict extraction, gauge update and
//! response assembly.

use crate::helpers::*;
use axum::http::StatusCode;
use serde_json::Value;
use wiremock::MockServer;

#[tokio::test]
async fn test_check_produces_potential_verdict_and_sets_gauge() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;
    mount_prometheus(&prometheus, "0.42", "1.3", "2097152").await;
    mount_inference(&inference, "Anomalía Detectada: Potencial\nJustificación: carga elevada").await;

    let (addr, metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/aiops/check")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["anomaly"], "Potencial");
    assert_eq!(body["explanation"], "carga elevada");
    assert_eq!(
        body["analysis"],
        "Anomalía Detectada: Potencial\nJustificación: carga elevada"
    );

    // Context carries the validated snapshot, memory already in MB.
    assert_eq!(body["context"]["protocol"], "aiops-context/v1");
    assert_eq!(body["context"]["schema"]["name"], "SystemState");
    assert_eq!(body["context"]["data"]["cpu_usage_rate_5m"], 0.42);
    assert_eq!(body["context"]["data"]["load_average_1m"], 1.3);
    assert_eq!(body["context"]["data"]["memory_available_mb"], 2.0);
    assert!(body["context"]["data"]["timestamp"].as_i64().unwrap() > 0);

    assert_eq!(metrics.verdict(), 2);
}

#[tokio::test]
async fn test_absent_metrics_still_produce_a_check() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;
    mount_query(&prometheus, centinela::collector::CPU_USAGE_QUERY, instant_query_result("0.10"))
        .await;
    mount_query(&prometheus, centinela::collector::LOAD_AVERAGE_QUERY, empty_query_result()).await;
    mount_query(&prometheus, centinela::collector::MEMORY_AVAILABLE_QUERY, empty_query_result())
        .await;
    mount_inference(&inference, "Anomalía Detectada: No\nJustificación: sin datos suficientes")
        .await;

    let (addr, metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/aiops/check")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["anomaly"], "No");
    // Absent series surface as null, not zero.
    assert_eq!(body["context"]["data"]["load_average_1m"], Value::Null);
    assert_eq!(body["context"]["data"]["memory_available_mb"], Value::Null);

    assert_eq!(metrics.verdict(), 0);
}

#[tokio::test]
async fn test_gauge_visible_through_metrics_endpoint() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;
    mount_prometheus(&prometheus, "0.42", "1.3", "2097152").await;
    mount_inference(&inference, "Anomalía Detectada: Sí\nJustificación: uso de CPU anómalo").await;

    let (addr, _metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let check = reqwest::get(format!("http://{addr}/aiops/check")).await.unwrap();
    assert_eq!(check.status(), StatusCode::OK);

    let scrape = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
    assert_eq!(scrape.status(), StatusCode::OK);
    let content_type = scrape.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("openmetrics-text"));

    let body = scrape.text().await.unwrap();
    assert!(body.contains("centinela_anomaly_verdict 1"));
    assert!(body.contains(r#"centinela_checks_total{outcome="ok"} 1"#));
}

#[tokio::test]
async fn test_unparseable_analysis_fails_open_to_no_anomaly() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;
    mount_prometheus(&prometheus, "0.42", "1.3", "2097152").await;
    mount_inference(&inference, "El sistema está dentro de parámetros normales.").await;

    let (addr, metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/aiops/check")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["anomaly"], "No");
    assert_eq!(body["explanation"], "No explanation available.");
    assert_eq!(metrics.verdict(), 0);
}

#[tokio::test]
async fn test_empty_candidates_tolerated_via_placeholder() {
    let prometheus = MockServer::start().await;
    let inference = MockServer::start().await;
    mount_prometheus(&prometheus, "0.42", "1.3", "2097152").await;
    wiremock::Mock::given(wiremock::matchers::method("POST"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&inference)
        .await;

    let (addr, _metrics) = spawn_test_api(
        prometheus.uri(),
        inference_url(&inference),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/aiops/check")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["analysis"], "analysis not available");
    assert_eq!(body["anomaly"], "No");
}
