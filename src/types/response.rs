// src/types/response.rs
use serde::{Deserialize, Serialize};

use super::analysis::MatchReport;

// ===== Analyze Endpoint Response =====

/// Body returned by both backend flavours. Only the fields relevant to the
/// active contract are populated.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<MatchReport>,
    pub analysis: Option<String>,
    pub resume_preview: Option<String>,
    pub error: Option<String>,
}

impl AnalyzeResponse {
    /// Best-effort parse used for error bodies, which may not be JSON at all
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
