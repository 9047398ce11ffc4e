// src/workflow/reducer.rs
//! Single update function for every analyzer event

use tracing::{debug, info, warn};

use super::state::UiState;
use crate::contract::BackendContract;
use crate::error::AnalysisError;
use crate::file_validator::{FileValidationError, FileValidator};
use crate::types::{AnalysisRequest, AnalysisResult, ResumeFile};

#[derive(Debug)]
pub enum UiEvent {
    FileSelected(ResumeFile),
    /// A file refused before its contents were loaded
    FileRejected(FileValidationError),
    FileRemoved,
    JobTextChanged(String),
    SubmitRequested,
    RequestSettled {
        request_id: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}

/// Work the caller must perform after an update
#[derive(Debug)]
pub enum UiEffect {
    None,
    SendRequest {
        request_id: u64,
        request: AnalysisRequest,
    },
}

#[derive(Debug, Clone)]
pub struct Workflow {
    contract: BackendContract,
    state: UiState,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl Workflow {
    pub fn new(contract: BackendContract) -> Self {
        Self {
            contract,
            state: UiState::default(),
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub fn contract(&self) -> BackendContract {
        self.contract
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn update(&mut self, event: UiEvent) -> UiEffect {
        match event {
            UiEvent::FileSelected(file) => {
                match FileValidator::validate(&file, self.contract.file_policy()) {
                    Ok(()) => {
                        debug!("Selected resume: {}", file.file_name);
                        self.state.selected_file = Some(file);
                    }
                    Err(err) => self.fail(AnalysisError::from(err)),
                }
                UiEffect::None
            }

            // previous selection is kept
            UiEvent::FileRejected(err) => {
                self.fail(AnalysisError::from(err));
                UiEffect::None
            }

            UiEvent::FileRemoved => {
                self.state.selected_file = None;
                UiEffect::None
            }

            UiEvent::JobTextChanged(text) => {
                self.state.job_text = text;
                UiEffect::None
            }

            UiEvent::SubmitRequested => self.begin_submission(),

            UiEvent::RequestSettled {
                request_id,
                outcome,
            } => {
                self.settle(request_id, outcome);
                UiEffect::None
            }
        }
    }

    fn begin_submission(&mut self) -> UiEffect {
        if !self.state.can_submit() {
            debug!("Submit ignored: request already in flight");
            return UiEffect::None;
        }

        if let Err(err) = self
            .contract
            .check_submission(self.state.selected_file.is_some(), &self.state.job_text)
        {
            self.fail(err);
            return UiEffect::None;
        }

        let Some(resume) = self.state.selected_file.clone() else {
            return UiEffect::None;
        };

        self.state.error = None;
        self.state.error_hint = None;
        self.state.loading = true;
        self.state.result = None;

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);

        info!("Submitting analysis request #{} for {}", request_id, resume.file_name);

        UiEffect::SendRequest {
            request_id,
            request: AnalysisRequest {
                resume,
                job_text: self.state.job_text.clone(),
            },
        }
    }

    fn settle(&mut self, request_id: u64, outcome: Result<AnalysisResult, AnalysisError>) {
        if self.in_flight != Some(request_id) {
            warn!("Dropping stale response for request #{}", request_id);
            return;
        }

        self.in_flight = None;
        self.state.loading = false;

        match outcome {
            Ok(result) => {
                info!("Analysis request #{} succeeded", request_id);
                self.state.result = Some(result);
            }
            Err(err) => {
                warn!("Analysis request #{} failed: {}", request_id, err);
                self.fail(err);
            }
        }
    }

    /// Show an error. Only file rejections carry a hint.
    fn fail(&mut self, err: AnalysisError) {
        self.state.error = Some(err.user_message(self.contract));
        self.state.error_hint = match err {
            AnalysisError::InvalidFile(file_err) => Some(file_err.suggestion),
            _ => None,
        };
    }
}
