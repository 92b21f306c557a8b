//! Command-line and environment configuration
//!
//! Values resolve as: CLI flag > environment variable (including a `.env`
//! file loaded at startup) > default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::llm::{GeminiModel, GenerationConfig, LlmError};
use crate::models::DEFAULT_MAX_MOOD_CHARS;

#[derive(Debug, Clone, Parser)]
#[command(name = "feelsync")]
#[command(about = "Generates short comfort messages for a mood using Gemini on Vertex AI")]
pub struct Settings {
    /// Address to bind the HTTP server to
    #[arg(long, env = "COMFORT_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, env = "COMFORT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// GCP project that hosts the Vertex AI endpoint
    #[arg(long, env = "GCP_PROJECT_ID")]
    pub project_id: String,

    /// Vertex AI region
    #[arg(long, env = "GCP_LOCATION", default_value = "us-central1")]
    pub location: String,

    /// Gemini model id
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash", value_parser = parse_model)]
    pub model: GeminiModel,

    /// Service-account key file; Application Default Credentials when unset
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_file: Option<PathBuf>,

    /// Upper bound on generated tokens per message, thinking included
    #[arg(long, env = "COMFORT_MAX_OUTPUT_TOKENS", default_value_t = 1024)]
    pub max_output_tokens: u32,

    /// Thinking token budget; 0 disables thinking. Defaults to 0 on the
    /// flash models and to the server default elsewhere
    #[arg(long, env = "COMFORT_THINKING_BUDGET")]
    pub thinking_budget: Option<u32>,

    /// Sampling temperature; model default when unset
    #[arg(long, env = "COMFORT_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Timeout for the whole Vertex AI call, in seconds
    #[arg(long, env = "COMFORT_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Longest mood accepted, in characters
    #[arg(long, env = "COMFORT_MAX_MOOD_CHARS", default_value_t = DEFAULT_MAX_MOOD_CHARS)]
    pub max_mood_chars: usize,
}

impl Settings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Generation parameters, checked against Vertex AI's accepted ranges
    pub fn generation_config(&self) -> Result<GenerationConfig, LlmError> {
        let mut config = GenerationConfig::new(self.max_output_tokens);
        if let Some(t) = self.temperature {
            config = config.with_temperature(t);
        }
        if let Some(budget) = self
            .thinking_budget
            .or_else(|| self.model.default_thinking_budget())
        {
            config = config.with_thinking_budget(budget);
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_model(s: &str) -> Result<GeminiModel, String> {
    s.parse::<GeminiModel>().map_err(|e| e.to_string())
}
