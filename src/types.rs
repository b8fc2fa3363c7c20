//! Core data types: generation configuration, partial updates, result records and run mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder token substituted with the product name in user prompt templates.
pub const PRODUCT_NAME_PLACEHOLDER: &str = "{product_name}";

/// Lower and upper bound on batched sample counts.
pub const MIN_SAMPLE_COUNT: usize = 2;
pub const MAX_SAMPLE_COUNT: usize = 12;

/// Text generation configuration
///
/// Numeric fields carry intended ranges (temperature 0.0-2.0, max_tokens 10-500)
/// but are never validated here; out-of-range values pass to the provider verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Template containing `{product_name}`
    #[serde(default = "default_user_prompt")]
    pub user_prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub presence_penalty: f64,
    #[serde(default)]
    pub frequency_penalty: f64,
    #[serde(default)]
    pub stop_sequences: Vec<String>,
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_system_prompt() -> String {
    "You are an expert product description writer. Create compelling, detailed descriptions \
     that highlight key features and benefits."
        .to_string()
}

fn default_user_prompt() -> String {
    format!("Write a product description for: {}", PRODUCT_NAME_PLACEHOLDER)
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    150
}

fn default_product_name() -> String {
    "iPhone 15 Pro".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            system_prompt: default_system_prompt(),
            user_prompt: default_user_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop_sequences: Vec::new(),
            product_name: default_product_name(),
        }
    }
}

/// Partial configuration update. `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ConfigUpdate::default()
    }

    /// Merge the provided fields over `config`.
    pub fn apply_to(self, config: &mut GenerationConfig) {
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(system_prompt) = self.system_prompt {
            config.system_prompt = system_prompt;
        }
        if let Some(user_prompt) = self.user_prompt {
            config.user_prompt = user_prompt;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(presence_penalty) = self.presence_penalty {
            config.presence_penalty = presence_penalty;
        }
        if let Some(frequency_penalty) = self.frequency_penalty {
            config.frequency_penalty = frequency_penalty;
        }
        if let Some(stop_sequences) = self.stop_sequences {
            config.stop_sequences = stop_sequences;
        }
        if let Some(product_name) = self.product_name {
            config.product_name = product_name;
        }
    }
}

/// Immutable record of one generation outcome.
///
/// Built once by the engine right after a provider call resolves; there are
/// no mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    id: String,
    config: GenerationConfig,
    output: String,
    token_count: usize,
    generation_time_ms: u64,
    timestamp: DateTime<Utc>,
}

impl GenerationResult {
    pub(crate) fn new(
        id: String,
        config: GenerationConfig,
        output: String,
        token_count: usize,
        generation_time_ms: u64,
    ) -> Self {
        Self {
            id,
            config,
            output,
            token_count,
            generation_time_ms,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn generation_time_ms(&self) -> u64 {
        self.generation_time_ms
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Currently displayed results, replaced wholesale by each run or comparison.
pub type ResultSet = Vec<GenerationResult>;

/// Execution mode for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RunMode {
    Single,
    Batched { sample_count: usize },
}

impl Default for RunMode {
    fn default() -> Self {
        RunMode::Single
    }
}

impl RunMode {
    pub fn is_batched(&self) -> bool {
        matches!(self, RunMode::Batched { .. })
    }
}
