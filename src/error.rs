// src/error.rs
use thiserror::Error;

use crate::contract::BackendContract;
use crate::file_validator::FileValidationError;

/// Everything that can end a selection or submission attempt
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid resume file {}: {}", .0.file_name, .0.message)]
    InvalidFile(FileValidationError),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server reported failure (status {status:?}): {message:?}")]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Text shown to the user for this error under the given contract
    pub fn user_message(&self, contract: BackendContract) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::InvalidFile(err) => err.message.clone(),
            Self::Server { message, .. } => contract.server_error_message(message.as_deref()),
            Self::Transport(_) | Self::MalformedResponse(_) => contract.transport_error_message(),
        }
    }
}

impl From<FileValidationError> for AnalysisError {
    fn from(err: FileValidationError) -> Self {
        Self::InvalidFile(err)
    }
}
