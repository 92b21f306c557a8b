// Service-level errors and their HTTP status mapping

use std::time::Duration;

use thiserror::Error;
use warp::http::StatusCode;

use crate::llm::LlmError;

/// Errors produced while serving a comfort request
#[derive(Debug, Error)]
pub enum ComfortError {
    /// The caller supplied an unusable mood
    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    /// The model call succeeded but produced no text
    #[error("Model returned an empty message")]
    EmptyMessage,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl warp::reject::Reject for ComfortError {}

impl ComfortError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ComfortError::InvalidMood(_) => StatusCode::BAD_REQUEST,
            ComfortError::EmptyMessage => StatusCode::BAD_GATEWAY,
            ComfortError::Llm(err) => match err {
                LlmError::RateLimitExceeded { .. } => StatusCode::SERVICE_UNAVAILABLE,
                LlmError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                LlmError::AuthenticationError(_)
                | LlmError::HttpError { .. }
                | LlmError::ProviderError { .. }
                | LlmError::SerializationError(_) => StatusCode::BAD_GATEWAY,
                LlmError::InvalidRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message safe to show the caller; upstream details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            ComfortError::InvalidMood(reason) => reason.clone(),
            ComfortError::EmptyMessage => "The model did not return a message".to_string(),
            ComfortError::Llm(err) => match err {
                LlmError::RateLimitExceeded { .. } => {
                    "The model service is busy, please try again later".to_string()
                }
                LlmError::Timeout(_) => "The model service did not respond in time".to_string(),
                LlmError::InvalidRequest(_) => "Internal server error".to_string(),
                _ => "The model service failed to generate a message".to_string(),
            },
        }
    }

    /// Delay to advertise in a `Retry-After` header, if the upstream gave one
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ComfortError::Llm(LlmError::RateLimitExceeded { retry_after }) => *retry_after,
            _ => None,
        }
    }
}
