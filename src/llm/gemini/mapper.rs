//! Mapping between abstraction types and Gemini types

use crate::llm::core::{
    config::GenerationConfig,
    error::LlmError,
    types::{FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole, UsageMetadata},
};

use super::types::{
    Content, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse, Part,
    SystemInstruction, ThinkingConfig,
};

/// Convert our abstraction request to Gemini's request format
pub fn to_gemini_request(request: GenerateRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: request.messages.into_iter().map(to_gemini_content).collect(),
        system_instruction: request.system.map(|s| SystemInstruction {
            parts: vec![Part::text(s)],
        }),
        generation_config: Some(to_gemini_generation_config(request.config)),
    }
}

fn to_gemini_content(message: Message) -> Content {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "model",
    };

    Content {
        role: role.to_string(),
        parts: vec![Part::text(message.text)],
    }
}

fn to_gemini_generation_config(config: GenerationConfig) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        max_output_tokens: Some(config.max_tokens),
        temperature: config.temperature,
        top_p: config.top_p,
        top_k: config.top_k,
        stop_sequences: config.stop_sequences,
        thinking_config: config
            .thinking_budget
            .map(|thinking_budget| ThinkingConfig { thinking_budget }),
    }
}

/// Convert a Gemini response into a completed generation
///
/// Only the first candidate is used; its text parts are joined in order.
/// A response without candidates means the prompt itself was blocked.
pub fn from_gemini_response(response: GenerateContentResponse) -> Result<GenerateResponse, LlmError> {
    let usage = response.usage_metadata.as_ref().map(|u| UsageMetadata {
        input_tokens: u.prompt_token_count,
        output_tokens: u.candidates_token_count,
        total_tokens: u.total_token_count,
        thinking_tokens: u.thoughts_token_count,
    });

    let Some(candidate) = response.candidates.into_iter().next() else {
        let feedback = response.prompt_feedback.unwrap_or_default();
        return Err(LlmError::ProviderError {
            code: feedback
                .block_reason
                .unwrap_or_else(|| "NO_CANDIDATES".to_string()),
            message: feedback
                .block_reason_message
                .unwrap_or_else(|| "Model returned no candidates".to_string()),
        });
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let finish_reason = candidate
        .finish_reason
        .as_deref()
        .map(map_finish_reason)
        .unwrap_or(FinishReason::Stop);

    Ok(GenerateResponse {
        text,
        finish_reason,
        usage,
    })
}

/// Map Gemini finish reason to our abstraction
fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => FinishReason::Safety,
        "RECITATION" => FinishReason::Recitation,
        other => FinishReason::Other(other.to_string()),
    }
}
