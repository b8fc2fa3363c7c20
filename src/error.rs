//! Error types for the prompt playground engine.

use thiserror::Error;

/// Engine, provider and configuration errors
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PlaygroundError {
    /// Fatal errors abort a whole run or comparison when raised before the
    /// first provider call. Errors returned by a call itself, of any kind,
    /// become sentinel results.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlaygroundError::MissingCredential(_) | PlaygroundError::ConfigError(_)
        )
    }
}

impl From<config::ConfigError> for PlaygroundError {
    fn from(err: config::ConfigError) -> Self {
        PlaygroundError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for PlaygroundError {
    fn from(err: serde_json::Error) -> Self {
        PlaygroundError::Serialization(err.to_string())
    }
}
