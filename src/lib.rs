//! Client for a resume-matching service: upload a resume with a job
//! description, then render the returned match analysis.

pub mod cli;
pub mod contract;
pub mod core;
pub mod error;
pub mod file_validator;
pub mod render;
pub mod theme;
pub mod types;
pub mod utils;
pub mod workflow;

pub use contract::BackendContract;
pub use error::AnalysisError;
pub use types::{AnalysisRequest, AnalysisResult, MatchReport, ResumeFile};
pub use workflow::{AnalyzeSession, UiState, Workflow};
