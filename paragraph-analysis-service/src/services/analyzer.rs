//! Paragraph analyzers.
//!
//! `PlaceholderAnalyzer` is the only backend: it returns the same fixed
//! analysis for every paragraph. Handlers depend on the `ParagraphAnalyzer`
//! trait so a real backend can be swapped in through `AppState`.

use crate::dtos::{AnalysisData, AnalysisRecord, AnalysisResponse};
use serde_json::Value;

pub const PLACEHOLDER_SENTIMENT_SCORE: f64 = 0.5;
pub const PLACEHOLDER_READABILITY_SCORE: f64 = 0.5;

pub trait ParagraphAnalyzer: Send + Sync {
    fn analyze(&self, paragraph: &Value) -> AnalysisData;
}

/// Returns fixed placeholder values regardless of paragraph content.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderAnalyzer;

impl ParagraphAnalyzer for PlaceholderAnalyzer {
    fn analyze(&self, _paragraph: &Value) -> AnalysisData {
        AnalysisData {
            sentiment_score: PLACEHOLDER_SENTIMENT_SCORE,
            readability_score: PLACEHOLDER_READABILITY_SCORE,
            topics: strings(&["topic1", "topic2"]),
            summary: "summary".to_string(),
            suggestions: strings(&["suggestion1", "suggestion2"]),
            references: strings(&["reference1", "reference2"]),
            tags: strings(&["tag1", "tag2"]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// One record per paragraph, indexed by input position.
pub fn analyze_all(analyzer: &dyn ParagraphAnalyzer, paragraphs: &[Value]) -> AnalysisResponse {
    let analysis_results = paragraphs
        .iter()
        .enumerate()
        .map(|(index, paragraph)| AnalysisRecord {
            index,
            analysis_data: analyzer.analyze(paragraph),
        })
        .collect();

    AnalysisResponse { analysis_results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholder_values_match_contract() {
        let data = PlaceholderAnalyzer.analyze(&json!("Hello world."));

        assert_eq!(data.sentiment_score, 0.5);
        assert_eq!(data.readability_score, 0.5);
        assert_eq!(data.topics, vec!["topic1", "topic2"]);
        assert_eq!(data.summary, "summary");
        assert_eq!(data.suggestions, vec!["suggestion1", "suggestion2"]);
        assert_eq!(data.references, vec!["reference1", "reference2"]);
        assert_eq!(data.tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn analysis_ignores_content() {
        let short = PlaceholderAnalyzer.analyze(&json!("A"));
        let long = PlaceholderAnalyzer.analyze(&json!("A much longer paragraph. With two sentences."));
        let not_text = PlaceholderAnalyzer.analyze(&json!(42));

        assert_eq!(short, long);
        assert_eq!(short, not_text);
    }

    #[test]
    fn analyze_all_indexes_in_input_order() {
        let paragraphs = vec![json!("A"), json!("B"), json!("C")];
        let response = analyze_all(&PlaceholderAnalyzer, &paragraphs);

        let indices: Vec<usize> = response.analysis_results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn analyze_all_of_nothing_is_empty() {
        let response = analyze_all(&PlaceholderAnalyzer, &[]);
        assert!(response.analysis_results.is_empty());
    }

    struct LengthAnalyzer;

    impl ParagraphAnalyzer for LengthAnalyzer {
        fn analyze(&self, paragraph: &Value) -> AnalysisData {
            let mut data = PlaceholderAnalyzer.analyze(paragraph);
            data.summary = paragraph.as_str().unwrap_or_default().len().to_string();
            data
        }
    }

    #[test]
    fn analyze_all_delegates_each_paragraph() {
        let paragraphs = vec![json!("ab"), json!("abcd")];
        let response = analyze_all(&LengthAnalyzer, &paragraphs);

        assert_eq!(response.analysis_results[0].analysis_data.summary, "2");
        assert_eq!(response.analysis_results[1].analysis_data.summary, "4");
    }
}
