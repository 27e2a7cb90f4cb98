use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;
use service_core::observability::render_metrics;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": state.config.service_version,
    }))
}

pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
