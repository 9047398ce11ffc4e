// src/file_validator.rs
use tracing::{error, info};

use crate::types::ResumeFile;
use crate::utils::{format_file_size, validate_file_extension};

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];
pub const MAX_RESUME_SIZE: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidationError {
    pub file_name: String,
    pub error_type: FileErrorType,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorType {
    WrongFormat,
    TooLarge,
}

impl FileErrorType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongFormat => "RESUME_WRONG_FORMAT",
            Self::TooLarge => "RESUME_TOO_LARGE",
        }
    }
}

/// How strictly a selected file is checked before it is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolicy {
    AcceptAll,
    /// PDF, DOCX or TXT only, at most 16 MiB
    Restricted,
}

pub struct FileValidator;

impl FileValidator {
    pub fn validate(file: &ResumeFile, policy: FilePolicy) -> Result<(), FileValidationError> {
        Self::validate_metadata(&file.file_name, file.size(), policy)
    }

    /// Check name and size alone, so an oversized file can be refused before it is read
    pub fn validate_metadata(
        file_name: &str,
        size: u64,
        policy: FilePolicy,
    ) -> Result<(), FileValidationError> {
        if policy == FilePolicy::AcceptAll {
            return Ok(());
        }

        if validate_file_extension(file_name, ALLOWED_EXTENSIONS).is_err() {
            let error_type = FileErrorType::WrongFormat;
            error!(
                "[{}] Rejected resume with unsupported format: {}",
                error_type.code(),
                file_name
            );
            return Err(FileValidationError {
                file_name: file_name.to_string(),
                error_type,
                message: "Please upload a PDF, DOCX, or TXT file.".to_string(),
                suggestion: "Export your resume as PDF or DOCX and try again".to_string(),
            });
        }

        if size > MAX_RESUME_SIZE {
            let error_type = FileErrorType::TooLarge;
            error!(
                "[{}] Rejected resume {}: {} exceeds limit",
                error_type.code(),
                file_name,
                format_file_size(size)
            );
            return Err(FileValidationError {
                file_name: file_name.to_string(),
                error_type,
                message: "File size must be less than 16MB.".to_string(),
                suggestion: "Remove embedded images or compress the document".to_string(),
            });
        }

        info!("Resume validation passed: {}", file_name);
        Ok(())
    }
}
