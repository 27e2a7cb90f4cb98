use crate::dtos::{AnalysisRequest, AnalysisResponse};
use crate::services::analyze_all;
use crate::startup::AppState;
use axum::{extract::State, Json};

pub const PARAGRAPHS_ANALYZED_TOTAL: &str = "paragraphs_analyzed_total";

/// `POST /paragraph/analyze`
///
/// Bodies that are not JSON are rejected by axum's `Json` extractor. Any
/// JSON object is accepted; a missing or non-array `paragraphs` yields no
/// results.
pub async fn analyze_paragraphs(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<AnalysisResponse> {
    let paragraphs = request.paragraphs();

    let response = analyze_all(state.analyzer.as_ref(), paragraphs);

    record_analyzed(paragraphs.len());
    tracing::info!(paragraph_count = paragraphs.len(), "Analyzed paragraphs");

    Json(response)
}

fn record_analyzed(count: usize) {
    metrics::counter!(PARAGRAPHS_ANALYZED_TOTAL).increment(count as u64);
}
