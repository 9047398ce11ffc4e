// src/core/transport.rs
use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, AnalysisResult};

/// Sends one analysis request and resolves to its outcome.
///
/// Implementations must always resolve, so the caller can clear its loading
/// state whatever happened on the wire.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
