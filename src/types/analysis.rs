// src/types/analysis.rs
//! Domain types for one resume analysis: the uploaded file, the request and the result

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::get_file_extension;

/// A resume file held in memory, ready to be sent as a multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Final path component, used as the uploaded file name
    pub fn name_from_path(path: &Path) -> Result<String> {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Invalid resume path: {}", path.display()))
    }

    /// Load a resume from disk, keeping only the final path component as its name
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = Self::name_from_path(path)?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

        Ok(Self { file_name, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn extension(&self) -> Option<String> {
        get_file_extension(&self.file_name)
    }

    /// MIME type for the multipart part, derived from the extension
    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }
}

/// Payload for a single submission. Built fresh each time and dropped once settled.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume: ResumeFile,
    pub job_text: String,
}

/// Structured result returned under `data` by the structured backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

impl MatchReport {
    /// Fill proportion of the score ring, clamped to [0, 1]
    pub fn score_fraction(&self) -> f64 {
        f64::from(self.match_score.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Structured(MatchReport),
    Markdown {
        analysis: String,
        resume_preview: Option<String>,
    },
}
