// src/workflow/session.rs
use anyhow::{Context, Result};
use std::path::Path;

use super::reducer::{UiEffect, UiEvent, Workflow};
use super::state::UiState;
use crate::contract::BackendContract;
use crate::core::AnalysisTransport;
use crate::file_validator::{FilePolicy, FileValidator};
use crate::types::ResumeFile;

/// Drives a [`Workflow`] against a transport, performing its effects
pub struct AnalyzeSession<T> {
    workflow: Workflow,
    transport: T,
}

impl<T: AnalysisTransport> AnalyzeSession<T> {
    pub fn new(contract: BackendContract, transport: T) -> Self {
        Self {
            workflow: Workflow::new(contract),
            transport,
        }
    }

    pub fn state(&self) -> &UiState {
        self.workflow.state()
    }

    pub fn select_file(&mut self, file: ResumeFile) -> &UiState {
        self.workflow.update(UiEvent::FileSelected(file));
        self.workflow.state()
    }

    /// Read a resume from disk and select it. Under a restricted policy the
    /// name and size are checked first, so a rejected file is never loaded.
    pub async fn select_path(&mut self, path: &Path) -> Result<&UiState> {
        let policy = self.workflow.contract().file_policy();
        if policy == FilePolicy::Restricted {
            let file_name = ResumeFile::name_from_path(path)?;
            let size = tokio::fs::metadata(path)
                .await
                .with_context(|| format!("Failed to read resume file: {}", path.display()))?
                .len();
            if let Err(err) = FileValidator::validate_metadata(&file_name, size, policy) {
                self.workflow.update(UiEvent::FileRejected(err));
                return Ok(self.workflow.state());
            }
        }

        let file = ResumeFile::from_path(path).await?;
        Ok(self.select_file(file))
    }

    pub fn set_job_text(&mut self, text: impl Into<String>) -> &UiState {
        self.workflow.update(UiEvent::JobTextChanged(text.into()));
        self.workflow.state()
    }

    pub fn remove_file(&mut self) -> &UiState {
        self.workflow.update(UiEvent::FileRemoved);
        self.workflow.state()
    }

    /// Run one submission to completion. Every sent request is settled, so
    /// loading is always cleared on return.
    pub async fn submit(&mut self) -> &UiState {
        if let UiEffect::SendRequest {
            request_id,
            request,
        } = self.workflow.update(UiEvent::SubmitRequested)
        {
            let outcome = self.transport.analyze(&request).await;
            self.workflow.update(UiEvent::RequestSettled {
                request_id,
                outcome,
            });
        }
        self.workflow.state()
    }
}
