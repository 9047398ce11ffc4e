// src/workflow/state.rs
use crate::types::{AnalysisResult, ResumeFile};

pub const UPLOAD_PLACEHOLDER: &str = "Drop your resume here or click to browse";

/// What the file picker shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDisplay {
    Placeholder,
    Selected { name: String, size: u64 },
}

impl FileDisplay {
    pub fn label(&self) -> String {
        match self {
            Self::Placeholder => UPLOAD_PLACEHOLDER.to_string(),
            Self::Selected { name, .. } => name.clone(),
        }
    }
}

/// Screen state of the analyzer. Starts empty and only changes through
/// [`Workflow::update`](super::Workflow::update).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub(super) selected_file: Option<ResumeFile>,
    pub(super) job_text: String,
    pub(super) loading: bool,
    pub(super) result: Option<AnalysisResult>,
    pub(super) error: Option<String>,
    /// How to fix a rejected file
    pub(super) error_hint: Option<String>,
}

impl UiState {
    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.selected_file.as_ref()
    }

    pub fn job_text(&self) -> &str {
        &self.job_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_hint(&self) -> Option<&str> {
        self.error_hint.as_deref()
    }

    /// The analyze trigger is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn file_display(&self) -> FileDisplay {
        match &self.selected_file {
            Some(file) => FileDisplay::Selected {
                name: file.file_name.clone(),
                size: file.size(),
            },
            None => FileDisplay::Placeholder,
        }
    }

    /// Label for the analyze trigger
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Analyzing..."
        } else {
            "Analyze Resume"
        }
    }
}
