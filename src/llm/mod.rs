//! LLM Abstraction Layer
//!
//! A provider trait plus a Google Gemini implementation hosted on Google
//! Cloud Platform's Vertex AI.

pub mod auth;
pub mod core;
pub mod gemini;

pub use auth::AuthenticationManager;
pub use self::core::{
    config::GenerationConfig,
    error::LlmError,
    provider::LlmProvider,
    types::{FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole, UsageMetadata},
};
pub use gemini::{GeminiClient, GeminiModel};
