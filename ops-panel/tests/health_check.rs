mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ops-panel");

    app.cleanup().await;
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/ready").await;
    assert!(response.status().is_success());

    app.cleanup().await;
}

#[tokio::test]
async fn readiness_fails_without_docs_dir() {
    let root = common::test_root();
    let mut config = common::test_config(&root).await;
    config.documents.docs_dir = root.join("missing-docs");

    let response = common::router(&config)
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Service unavailable");

    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/no/such/route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "no route for /no/such/route");

    app.cleanup().await;
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::spawn().await;

    let response = app.get("/metrics").await;
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    app.cleanup().await;
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::spawn().await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "req-42");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");

    app.cleanup().await;
}

#[tokio::test]
async fn incomplete_document_catalog_fails_startup() {
    let root = common::test_root();
    let mut config = common::test_config(&root).await;
    config
        .documents
        .catalog
        .remove(&ops_panel::models::DocumentKey::UserGuide);

    let result = ops_panel::startup::Application::build(config).await;
    assert!(result.is_err());

    let _ = tokio::fs::remove_dir_all(&root).await;
}
