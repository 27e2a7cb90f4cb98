mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "paragraph-analysis-service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("http://localhost:{}/metrics", app.port))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    // No recorder is installed in tests
    let body = response.text().await.expect("Failed to get response body");
    assert!(body.starts_with('#'), "Unexpected metrics format: {}", body);
}
