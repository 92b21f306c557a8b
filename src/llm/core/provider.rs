//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};

/// Main interface that all LLM provider implementations must satisfy
///
/// Implementations are shared across concurrent requests, so they must be
/// `Send + Sync` and must not need `&mut self` to issue a call.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a complete response for the request
    ///
    /// One call is one outbound request to the provider. No retries are
    /// attempted; failures are returned to the caller as-is.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;

    /// Model identifier, used for logging
    fn model_name(&self) -> &str;
}
