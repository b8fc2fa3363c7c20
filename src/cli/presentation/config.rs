//! Config command presentation: effective configuration and validation findings.

use super::shared::format_section_heading;
use crate::config::{PlaygroundConfig, ValidationError};
use crate::error::PlaygroundError;
use crate::provider::profile::provider_kind_slug;

pub fn format_config_text(config: &PlaygroundConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format_section_heading("Provider")));
    out.push_str(&format!("  kind: {}\n", provider_kind_slug(config.provider.kind)));
    out.push_str(&format!(
        "  endpoint: {}\n",
        config.provider.base_url.as_deref().unwrap_or("(default endpoint)")
    ));
    out.push_str(&format!("  api key: {}\n", config.provider.api_key_status()));

    let generation = &config.generation;
    out.push_str(&format!("\n{}\n", format_section_heading("Generation")));
    out.push_str(&format!("  model: {}\n", generation.model));
    out.push_str(&format!("  product_name: {}\n", generation.product_name));
    out.push_str(&format!("  temperature: {}\n", generation.temperature));
    out.push_str(&format!("  max_tokens: {}\n", generation.max_tokens));
    out.push_str(&format!("  presence_penalty: {}\n", generation.presence_penalty));
    out.push_str(&format!("  frequency_penalty: {}\n", generation.frequency_penalty));
    if !generation.stop_sequences.is_empty() {
        out.push_str(&format!("  stop: {:?}\n", generation.stop_sequences));
    }
    out.push_str(&format!("  system_prompt: {}\n", generation.system_prompt));
    out.push_str(&format!("  user_prompt: {}\n", generation.user_prompt));

    out.push_str(&format!("\n{}\n", format_section_heading("Run")));
    out.push_str(&format!("  batched: {}\n", config.run.batched));
    out.push_str(&format!("  sample_count: {}\n", config.run.sample_count));
    if let Some(seed) = config.run.seed {
        out.push_str(&format!("  seed: {}\n", seed));
    }

    out.push_str(&format!("\n{}\n", format_section_heading("Logging")));
    out.push_str(&format!(
        "  level: {}  format: {}  output: {}\n",
        config.logging.level, config.logging.format, config.logging.output
    ));
    out
}

/// JSON form of the effective configuration. The inline API key is never printed.
pub fn format_config_json(config: &PlaygroundConfig) -> String {
    let mut value = serde_json::to_value(redacted(config)).unwrap_or(serde_json::Value::Null);
    if let Some(provider) = value.get_mut("provider").and_then(|p| p.as_object_mut()) {
        provider.insert(
            "api_key_status".to_string(),
            serde_json::Value::String(config.provider.api_key_status()),
        );
    }
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// TOML form of the effective configuration, loadable again with `--config`.
pub fn format_config_toml(config: &PlaygroundConfig) -> Result<String, PlaygroundError> {
    toml::to_string_pretty(&redacted(config))
        .map_err(|e| PlaygroundError::Serialization(e.to_string()))
}

fn redacted(config: &PlaygroundConfig) -> PlaygroundConfig {
    let mut redacted = config.clone();
    redacted.provider.api_key = None;
    redacted
}

pub fn format_validation_text(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid.".to_string(),
        Err(errors) => {
            let mut out = format!("Configuration has {} issue(s):\n", errors.len());
            for error in errors {
                out.push_str(&format!("  - {}\n", error));
            }
            out
        }
    }
}
