pub mod analysis;
pub mod health;

pub use analysis::analyze_paragraphs;
pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
