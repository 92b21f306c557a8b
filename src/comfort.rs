//! Comfort message generation
//!
//! Turns a mood into a prompt, sends it to the configured [`LlmProvider`] and
//! hands back the model's text.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::ComfortError;
use crate::llm::{FinishReason, GenerateRequest, GenerationConfig, LlmProvider};

/// Build the prompt sent to the model for a given mood
pub fn build_prompt(mood: &str) -> String {
    format!(
        "The user is feeling {}. Write a short, empathetic and encouraging message for them.",
        mood
    )
}

/// Generates comfort messages through a shared model provider
///
/// Cheap to clone; clones share the same provider.
#[derive(Clone)]
pub struct ComfortGenerator {
    provider: Arc<dyn LlmProvider>,
    config: GenerationConfig,
}

impl ComfortGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, config: GenerationConfig) -> Self {
        Self { provider, config }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Ask the model for a comfort message
    ///
    /// Makes exactly one provider call. The text is returned verbatim; an
    /// empty or whitespace-only reply is an error.
    pub async fn generate(&self, mood: &str) -> Result<String, ComfortError> {
        let prompt = build_prompt(mood);
        debug!(%prompt, "sending comfort prompt");

        let request = GenerateRequest::from_prompt(prompt, self.config.clone());
        let response = self.provider.generate(request).await?;

        let thinking_tokens = response.usage.map_or(0, |u| u.thinking_tokens);
        if let Some(usage) = response.usage {
            info!(
                model = self.provider.model_name(),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                thinking_tokens = usage.thinking_tokens,
                "comfort message generated"
            );
        }
        if response.finish_reason != FinishReason::Stop {
            warn!(
                finish_reason = ?response.finish_reason,
                thinking_tokens,
                "generation did not finish normally"
            );
        }

        if response.text.trim().is_empty() {
            if response.finish_reason == FinishReason::MaxTokens && thinking_tokens > 0 {
                warn!(
                    thinking_tokens,
                    max_tokens = self.config.max_tokens,
                    "output limit used up by thinking before any text was produced"
                );
            }
            return Err(ComfortError::EmptyMessage);
        }
        Ok(response.text)
    }
}
