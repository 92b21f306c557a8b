//! Gemini client implementation

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::llm::auth::adc::AuthenticationManager;
use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{from_gemini_response, to_gemini_request};
use super::types::{GenerateContentResponse, GoogleErrorEnvelope};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini model identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeminiModel {
    Gemini25Pro,
    #[default]
    Gemini25Flash,
    Gemini25FlashLite,
    Gemini20Flash,
    /// Any other published model id, e.g. a pinned version
    Custom(String),
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
            GeminiModel::Gemini20Flash => "gemini-2.0-flash",
            GeminiModel::Custom(id) => id,
        }
    }

    /// Thinking budget applied when none is configured
    ///
    /// The flash models can turn thinking off, which keeps short replies from
    /// being starved by reasoning tokens. Pro cannot disable it, and other
    /// models are left at their server-side default.
    pub fn default_thinking_budget(&self) -> Option<u32> {
        match self {
            GeminiModel::Gemini25Flash | GeminiModel::Gemini25FlashLite => Some(0),
            _ => None,
        }
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeminiModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() || id.contains('/') || id.contains(char::is_whitespace) {
            return Err(LlmError::InvalidRequest(format!(
                "invalid Gemini model id: {:?}",
                s
            )));
        }
        Ok(match id {
            "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
            "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
            "gemini-2.5-flash-lite" => GeminiModel::Gemini25FlashLite,
            "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
            other => GeminiModel::Custom(other.to_string()),
        })
    }
}

/// Client for interacting with Gemini models on Vertex AI
pub struct GeminiClient {
    http_client: Client,
    auth_manager: AuthenticationManager,
    project_id: String,
    location: String,
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini client using Application Default Credentials
    ///
    /// # Arguments
    ///
    /// * `project_id` - GCP project ID
    /// * `location` - GCP location (e.g., "us-central1")
    /// * `model` - Gemini model to use
    ///
    /// # Errors
    ///
    /// Returns an error if authentication initialization fails.
    pub async fn new(
        project_id: String,
        location: String,
        model: GeminiModel,
    ) -> Result<Self, LlmError> {
        let auth_manager = AuthenticationManager::new().await?;
        Self::with_auth(
            project_id,
            location,
            model,
            auth_manager,
            DEFAULT_REQUEST_TIMEOUT,
        )
    }

    /// Create a client with an already constructed authentication manager
    ///
    /// `request_timeout` bounds the whole outbound call, including reading
    /// the response body.
    pub fn with_auth(
        project_id: String,
        location: String,
        model: GeminiModel,
        auth_manager: AuthenticationManager,
        request_timeout: Duration,
    ) -> Result<Self, LlmError> {
        if project_id.trim().is_empty() {
            return Err(LlmError::InvalidRequest(
                "GCP project id must not be empty".to_string(),
            ));
        }
        if location.trim().is_empty() {
            return Err(LlmError::InvalidRequest(
                "GCP location must not be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            auth_manager,
            project_id,
            location,
            model,
        })
    }

    fn build_endpoint_url(&self) -> String {
        endpoint_url(&self.project_id, &self.location, &self.model)
    }

    async fn make_request(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        request.config.validate()?;
        let gemini_request = to_gemini_request(request);

        let token = self.auth_manager.get_token().await?;

        let url = self.build_endpoint_url();
        debug!(%url, "calling Vertex AI generateContent");
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&gemini_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "Vertex AI returned an error");
            return Err(error_from_status(status, retry_after, &body));
        }

        let body = response.text().await?;
        let gemini_response: GenerateContentResponse = serde_json::from_str(&body)?;
        from_gemini_response(gemini_response)
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.make_request(request).await
    }

    fn model_name(&self) -> &str {
        self.model.as_str()
    }
}

fn endpoint_url(project_id: &str, location: &str, model: &GeminiModel) -> String {
    format!(
        "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
        location, project_id, location, model.as_str()
    )
}

/// Retry-After in its delta-seconds form; HTTP dates are ignored
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Classify a non-2xx Vertex AI response
fn error_from_status(status: StatusCode, retry_after: Option<Duration>, body: &str) -> LlmError {
    let google = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .ok()
        .map(|e| e.error);

    match status {
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded { retry_after },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::AuthenticationError(
            google
                .map(|g| g.message)
                .unwrap_or_else(|| format!("Vertex AI rejected credentials ({})", status)),
        ),
        _ => match google {
            Some(g) if !g.status.is_empty() => LlmError::ProviderError {
                code: g.status,
                message: g.message,
            },
            _ => LlmError::HttpError {
                status: status.as_u16(),
                body: body.to_string(),
            },
        },
    }
}
