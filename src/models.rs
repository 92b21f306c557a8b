// Request and response bodies for the HTTP surface

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ComfortError;

/// Mood used when the caller does not supply one
pub const DEFAULT_MOOD: &str = "neutral";

/// Upper bound on mood length unless configured otherwise
pub const DEFAULT_MAX_MOOD_CHARS: usize = 200;

/// Body of `POST /generate_comfort`
///
/// The body must be a JSON object. `mood` is optional; a missing key and an
/// explicit `null` both mean [`DEFAULT_MOOD`]. Other keys are ignored.
#[derive(Debug, Clone)]
pub struct MoodRequest {
    pub mood: Option<String>,
}

// Hand-written so that only objects are accepted; the derived impl would also
// take a JSON array as positional fields.
impl<'de> Deserialize<'de> for MoodRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Map::<String, Value>::deserialize(deserializer)?;
        let mood = match body.get("mood") {
            None | Some(Value::Null) => None,
            Some(Value::String(mood)) => Some(mood.clone()),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "mood must be a string, got {}",
                    json_kind(other)
                )))
            }
        };
        Ok(Self { mood })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl MoodRequest {
    /// Resolve the mood to send to the generator
    ///
    /// The value is returned unmodified. It is rejected when it is blank or
    /// longer than `max_chars` characters.
    pub fn into_mood(self, max_chars: usize) -> Result<String, ComfortError> {
        let mood = self.mood.unwrap_or_else(|| DEFAULT_MOOD.to_string());

        if mood.trim().is_empty() {
            return Err(ComfortError::InvalidMood(
                "mood must not be empty".to_string(),
            ));
        }
        let len = mood.chars().count();
        if len > max_chars {
            return Err(ComfortError::InvalidMood(format!(
                "mood must be at most {} characters (got {})",
                max_chars, len
            )));
        }

        Ok(mood)
    }
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortResponse {
    pub message: String,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
