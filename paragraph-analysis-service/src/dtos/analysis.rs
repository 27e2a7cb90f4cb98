use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /paragraph/analyze`.
///
/// Paragraphs are kept as raw JSON values: their content is never inspected,
/// only counted.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    paragraphs: Option<Value>,
}

impl AnalysisRequest {
    /// The submitted paragraphs.
    ///
    /// Empty when the field is absent, null, or anything other than an array.
    pub fn paragraphs(&self) -> &[Value] {
        self.paragraphs
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub sentiment_score: f64,
    pub readability_score: f64,
    pub topics: Vec<String>,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub references: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub index: usize,
    pub analysis_data: AnalysisData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis_results: Vec<AnalysisRecord>,
}
