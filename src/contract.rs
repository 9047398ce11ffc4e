// src/contract.rs
//! Backend contracts. The two known analysis backends disagree on path, form
//! field, validation and result shape, so each is a named contract rather than
//! a merged superset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::file_validator::FilePolicy;

pub const STRUCTURED_ENDPOINT: &str = "/api/analyze";
pub const MARKDOWN_ENDPOINT: &str = "/analyze";

/// Minimum job description length for the structured backend, in characters
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendContract {
    /// JSON `data` object with score, strengths, missing skills and summary
    #[default]
    Structured,
    /// Markdown-subset `analysis` string
    Markdown,
}

impl BackendContract {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Structured => STRUCTURED_ENDPOINT,
            Self::Markdown => MARKDOWN_ENDPOINT,
        }
    }

    /// Multipart field carrying the job text
    pub fn job_field(&self) -> &'static str {
        match self {
            Self::Structured => "job_description",
            Self::Markdown => "job_requirements",
        }
    }

    pub fn file_policy(&self) -> FilePolicy {
        match self {
            Self::Structured => FilePolicy::AcceptAll,
            Self::Markdown => FilePolicy::Restricted,
        }
    }

    /// Check submit preconditions
    pub fn check_submission(&self, has_file: bool, job_text: &str) -> Result<(), AnalysisError> {
        let message = match self {
            Self::Structured
                if !has_file || job_text.chars().count() < MIN_JOB_DESCRIPTION_CHARS =>
            {
                "Upload a resume and add a proper job description."
            }
            Self::Markdown if !has_file => "Please upload a resume first.",
            Self::Markdown if job_text.trim().is_empty() => "Please enter job requirements.",
            _ => return Ok(()),
        };
        Err(AnalysisError::Validation(message.to_string()))
    }

    /// Text actually sent in the job field
    pub fn prepare_job_text(&self, job_text: &str) -> String {
        match self {
            Self::Structured => job_text.to_string(),
            Self::Markdown => job_text.trim().to_string(),
        }
    }

    /// Message for a failure reported by the server
    pub fn server_error_message(&self, server_text: Option<&str>) -> String {
        match self {
            Self::Structured => "Analysis failed. Please try again.".to_string(),
            Self::Markdown => server_text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or("An error occurred during analysis.")
                .to_string(),
        }
    }

    /// Message for a request that never produced a usable response
    pub fn transport_error_message(&self) -> String {
        match self {
            Self::Structured => "Analysis failed. Please try again.".to_string(),
            Self::Markdown => "Failed to connect to the server. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for BackendContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for BackendContract {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "json" => Ok(Self::Structured),
            "markdown" | "md" => Ok(Self::Markdown),
            other => anyhow::bail!("Unknown backend contract: {}. Use structured or markdown", other),
        }
    }
}
