//! Google Cloud credentials wrapper

use std::path::Path;

use gcp_auth::{AuthenticationManager as GcpAuthManager, CustomServiceAccount};

use crate::llm::core::error::LlmError;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Manages GCP access tokens for Vertex AI calls
///
/// Tokens are cached by `gcp_auth` and refreshed when they expire, so one
/// instance can be shared by every request for the life of the process.
///
/// Credential sources, in order of preference:
/// - an explicit service-account JSON file passed to [`AuthenticationManager::from_file`]
/// - `GOOGLE_APPLICATION_CREDENTIALS` environment variable
/// - user credentials from `gcloud auth application-default login`
/// - metadata server (Compute Engine, Cloud Run, GKE)
pub struct AuthenticationManager {
    inner: GcpAuthManager,
}

impl AuthenticationManager {
    /// Discover credentials using the standard ADC flow
    ///
    /// # Errors
    /// Returns an error if no valid credentials can be found.
    pub async fn new() -> Result<Self, LlmError> {
        let inner = GcpAuthManager::new().await.map_err(|e| {
            LlmError::AuthenticationError(format!("Failed to initialize ADC: {}", e))
        })?;

        Ok(Self { inner })
    }

    /// Load a service-account key file
    ///
    /// # Errors
    /// Returns an error if the file is missing or is not a service-account key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let account = CustomServiceAccount::from_file(path).map_err(|e| {
            LlmError::AuthenticationError(format!(
                "Failed to load service account {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self {
            inner: GcpAuthManager::from(account),
        })
    }

    /// Build from an optional key file, falling back to ADC
    pub async fn from_optional_file(path: Option<&Path>) -> Result<Self, LlmError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::new().await,
        }
    }

    /// Get an access token for the cloud platform scope
    ///
    /// # Errors
    /// Returns an error if token retrieval or refresh fails.
    pub async fn get_token(&self) -> Result<String, LlmError> {
        let token = self
            .inner
            .get_token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| LlmError::AuthenticationError(format!("Failed to get token: {}", e)))?;

        Ok(token.as_str().to_string())
    }
}
