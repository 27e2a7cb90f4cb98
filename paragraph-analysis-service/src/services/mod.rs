pub mod analyzer;

pub use analyzer::{analyze_all, ParagraphAnalyzer, PlaceholderAnalyzer};
