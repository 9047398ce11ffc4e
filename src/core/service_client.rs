// src/core/service_client.rs
//! HTTP client for the analysis backend - one multipart POST per submission

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

use crate::contract::BackendContract;
use crate::core::config_manager::ServiceConfig;
use crate::core::transport::AnalysisTransport;
use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, AnalysisResult, AnalyzeResponse};

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    contract: BackendContract,
}

impl ServiceClient {
    /// Create new service client. Without a timeout the request waits for the transport.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            contract: config.contract,
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.contract.endpoint())
    }

    fn build_form(&self, request: &AnalysisRequest) -> Result<Form, AnalysisError> {
        let resume = Part::bytes(request.resume.bytes.clone())
            .file_name(request.resume.file_name.clone())
            .mime_str(request.resume.content_type())
            .map_err(|e| AnalysisError::Transport(format!("Failed to create multipart: {}", e)))?;

        Ok(Form::new().part("resume", resume).text(
            self.contract.job_field(),
            self.contract.prepare_job_text(&request.job_text),
        ))
    }

    /// Map a decoded body onto the result the active contract expects
    fn extract_result(&self, response: AnalyzeResponse) -> Result<AnalysisResult, AnalysisError> {
        if !response.success {
            return Err(AnalysisError::Server {
                status: None,
                message: response.error,
            });
        }

        match self.contract {
            BackendContract::Structured => response
                .data
                .map(AnalysisResult::Structured)
                .ok_or_else(|| {
                    AnalysisError::MalformedResponse("success response without `data`".to_string())
                }),
            BackendContract::Markdown => response
                .analysis
                .map(|analysis| AnalysisResult::Markdown {
                    analysis,
                    resume_preview: response.resume_preview,
                })
                .ok_or_else(|| {
                    AnalysisError::MalformedResponse(
                        "success response without `analysis`".to_string(),
                    )
                }),
        }
    }
}

#[async_trait]
impl AnalysisTransport for ServiceClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let url = self.endpoint_url();
        let form = self.build_form(request)?;

        info!(
            "Calling analysis service: {} (resume: {}, {} bytes)",
            url,
            request.resume.file_name,
            request.resume.size()
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis request failed: {}", e);
                AnalysisError::Transport(e.to_string())
            })?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.text().await.map_err(|e| {
            error!("Failed to read analysis response: {}", e);
            AnalysisError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            error!("Analysis service error response {}: {}", status, body);
            return Err(AnalysisError::Server {
                status: Some(status.as_u16()),
                message: AnalyzeResponse::parse_lenient(&body).error,
            });
        }

        let parsed: AnalyzeResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse analysis response: {}. Raw response: {}", e, body);
            AnalysisError::MalformedResponse(e.to_string())
        })?;

        self.extract_result(parsed)
    }
}
