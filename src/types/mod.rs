// src/types/mod.rs
pub mod analysis;
pub mod response;

pub use analysis::{AnalysisRequest, AnalysisResult, MatchReport, ResumeFile};
pub use response::AnalyzeResponse;
