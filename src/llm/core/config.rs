//! Generation configuration parameters

use serde::{Deserialize, Serialize};

use super::error::LlmError;

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-2.0 on Gemini, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Tokens the model may spend reasoning before it answers; `0` disables
    /// thinking. Thinking tokens count against `max_tokens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: None,
            thinking_budget: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    pub fn with_thinking_budget(mut self, thinking_budget: u32) -> Self {
        self.thinking_budget = Some(thinking_budget);
        self
    }

    /// Check the parameters against the ranges Vertex AI accepts
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.max_tokens == 0 {
            return Err(LlmError::InvalidRequest(
                "max_tokens must be greater than zero".to_string(),
            ));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(LlmError::InvalidRequest(format!(
                    "temperature {} is outside 0.0..=2.0",
                    t
                )));
            }
        }
        if let Some(p) = self.top_p {
            if !(0.0..=1.0).contains(&p) {
                return Err(LlmError::InvalidRequest(format!(
                    "top_p {} is outside 0.0..=1.0",
                    p
                )));
            }
        }
        if let Some(budget) = self.thinking_budget {
            if budget >= self.max_tokens {
                return Err(LlmError::InvalidRequest(format!(
                    "thinking budget {} leaves no room for output within max_tokens {}",
                    budget, self.max_tokens
                )));
            }
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_tokens, 1024);
        assert!(config.temperature.is_none());
        assert!(config.stop_sequences.is_none());
        assert!(config.thinking_budget.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = GenerationConfig::new(512)
            .with_temperature(0.7)
            .with_top_p(0.9)
            .with_top_k(40)
            .with_stop_sequences(vec!["STOP".to_string()]);

        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.top_p, Some(0.9));
        assert_eq!(config.top_k, Some(40));
        assert_eq!(config.stop_sequences, Some(vec!["STOP".to_string()]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_tokens() {
        let err = GenerationConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_sampling() {
        assert!(GenerationConfig::new(10)
            .with_temperature(2.5)
            .validate()
            .is_err());
        assert!(GenerationConfig::new(10).with_top_p(1.5).validate().is_err());
        assert!(GenerationConfig::new(10)
            .with_temperature(2.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_thinking_budget_must_leave_room_for_output() {
        assert!(GenerationConfig::new(256)
            .with_thinking_budget(0)
            .validate()
            .is_ok());
        assert!(GenerationConfig::new(1024)
            .with_thinking_budget(512)
            .validate()
            .is_ok());
        let err = GenerationConfig::new(256)
            .with_thinking_budget(256)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_config_serialization_skips_unset_fields() {
        let config = GenerationConfig::new(1024).with_temperature(0.5);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_tokens\":1024"));
        assert!(json.contains("\"temperature\":0.5"));
        assert!(!json.contains("\"top_p\""));
        assert!(!json.contains("\"stop_sequences\""));
        assert!(!json.contains("\"thinking_budget\""));
    }
}
