pub mod analysis;

pub use analysis::{AnalysisData, AnalysisRecord, AnalysisRequest, AnalysisResponse};
