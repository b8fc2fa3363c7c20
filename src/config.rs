//! Configuration System
//!
//! Layered configuration for the playground: built-in defaults, the global
//! config file, workspace config files and `PLAYGROUND_*` environment
//! variables, in increasing precedence. Also hosts the in-memory
//! [`ConfigStore`] the engine reads generation settings from.

use crate::logging::LoggingConfig;
use crate::provider::ProviderSettings;
use crate::types::{GenerationConfig, RunMode, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;
mod store;

pub use facade::ConfigLoader;
pub use store::ConfigStore;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Initial generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Run mode defaults
    #[serde(default)]
    pub run: RunSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Run mode defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSettings {
    #[serde(default)]
    pub batched: bool,

    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Seed for reproducible batched variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_sample_count() -> usize {
    6
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            batched: false,
            sample_count: default_sample_count(),
            seed: None,
        }
    }
}

impl RunSettings {
    pub fn mode(&self) -> RunMode {
        if self.batched {
            RunMode::Batched {
                sample_count: self.sample_count,
            }
        } else {
            RunMode::Single
        }
    }
}

/// Configuration validation findings
#[derive(Debug, Clone)]
pub enum ValidationError {
    Provider(String),
    Generation(String),
    Run(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Run(msg) => write!(f, "Run: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PlaygroundConfig {
    /// Check values against their intended ranges.
    ///
    /// Advisory only: the engine passes out-of-range values to the provider
    /// verbatim and clamps the sample count itself.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(base_url) = &self.provider.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                errors.push(ValidationError::Provider(format!(
                    "base_url '{}' must start with http:// or https://",
                    base_url
                )));
            }
        }

        let generation = &self.generation;
        if generation.model.trim().is_empty() {
            errors.push(ValidationError::Generation("model cannot be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&generation.temperature) {
            errors.push(ValidationError::Generation(format!(
                "temperature {} outside [0, 2]",
                generation.temperature
            )));
        }
        if !(10..=500).contains(&generation.max_tokens) {
            errors.push(ValidationError::Generation(format!(
                "max_tokens {} outside [10, 500]",
                generation.max_tokens
            )));
        }
        for (name, value) in [
            ("presence_penalty", generation.presence_penalty),
            ("frequency_penalty", generation.frequency_penalty),
        ] {
            if !(-2.0..=2.0).contains(&value) {
                errors.push(ValidationError::Generation(format!(
                    "{} {} outside [-2, 2]",
                    name, value
                )));
            }
        }
        if generation.stop_sequences.iter().any(|s| s.is_empty()) {
            errors.push(ValidationError::Generation(
                "stop_sequences cannot contain empty entries".to_string(),
            ));
        }

        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&self.run.sample_count) {
            errors.push(ValidationError::Run(format!(
                "sample_count {} outside [{}, {}]",
                self.run.sample_count, MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
