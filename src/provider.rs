//! Generation Provider Abstraction
//!
//! The engine talks to text generation through [`GenerationProvider`] only, so
//! the concrete transport (Gemini over HTTP) can be swapped for a scripted
//! provider in tests.

use crate::error::PlaygroundError;
use crate::types::GenerationConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub mod gemini;
pub mod profile;

pub use gemini::GeminiClient;
pub use profile::{ProviderKind, ProviderSettings};

/// Text returned when a call succeeds but carries no generated text.
pub const NO_CONTENT_FALLBACK: &str = "No content generated";

/// Parameters forwarded with each generation call.
///
/// Presence and frequency penalties are recorded on results but are not part
/// of the provider request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub stop_sequences: Vec<String>,
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_tokens,
            stop_sequences: config.stop_sequences.clone(),
        }
    }
}

/// Text generation capability
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Fail with [`PlaygroundError::MissingCredential`] when no credential is configured.
    /// Called before any network I/O.
    fn check_credentials(&self) -> Result<(), PlaygroundError> {
        Ok(())
    }

    /// Generate text for a fully composed prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, PlaygroundError>;

    /// Provider name for logs and presentation
    fn provider_name(&self) -> &str;
}

// Map transport-level reqwest failures to provider errors
pub(crate) fn map_http_error(error: reqwest::Error) -> PlaygroundError {
    if let Some(status) = error.status() {
        map_status(status.as_u16(), &error.to_string())
    } else if error.is_timeout() {
        PlaygroundError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        PlaygroundError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        PlaygroundError::ProviderError(format!("HTTP error: {}", error))
    }
}

pub(crate) fn map_status(status: u16, detail: &str) -> PlaygroundError {
    match status {
        401 | 403 => PlaygroundError::ProviderAuthFailed(format!("Authentication failed: {}", detail)),
        429 => PlaygroundError::ProviderRateLimit(format!("Rate limit exceeded: {}", detail)),
        _ => PlaygroundError::ProviderRequestFailed(format!(
            "Request failed with status {}: {}",
            status, detail
        )),
    }
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PROVIDER_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub(crate) fn build_provider_http_client() -> Result<Client, PlaygroundError> {
    Client::builder()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .timeout(PROVIDER_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| PlaygroundError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}

/// Provider factory for creating provider clients from settings
pub struct ProviderFactory;

impl ProviderFactory {
    /// Build the configured provider. A missing credential is not an error
    /// here; it surfaces from [`GenerationProvider::check_credentials`] when a run starts.
    pub fn create(settings: &ProviderSettings) -> Result<Arc<dyn GenerationProvider>, PlaygroundError> {
        match settings.kind {
            ProviderKind::Gemini => {
                let mut client = GeminiClient::new(settings.resolve_api_key())?;
                if let Some(base_url) = &settings.base_url {
                    client = client.with_base_url(base_url.clone());
                }
                Ok(Arc::new(client))
            }
        }
    }
}

// Scripted provider for unit tests
#[cfg(test)]
pub struct MockProvider {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<String, PlaygroundError>>>,
    prompts: parking_lot::Mutex<Vec<(String, GenerationParams)>>,
    credential: bool,
}

#[cfg(test)]
impl MockProvider {
    pub fn new(responses: Vec<Result<String, PlaygroundError>>) -> Self {
        Self {
            responses: parking_lot::Mutex::new(responses.into()),
            prompts: parking_lot::Mutex::new(Vec::new()),
            credential: true,
        }
    }

    pub fn without_credential() -> Self {
        Self {
            credential: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationParams)> {
        self.prompts.lock().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl GenerationProvider for MockProvider {
    fn check_credentials(&self) -> Result<(), PlaygroundError> {
        if self.credential {
            Ok(())
        } else {
            Err(PlaygroundError::MissingCredential("mock".to_string()))
        }
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, PlaygroundError> {
        self.prompts.lock().push((prompt.to_string(), params.clone()));
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
