//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PlaygroundError;

/// Map engine errors to a message for CLI output, with a hint where one helps.
pub fn map_error(e: &PlaygroundError) -> String {
    match e {
        PlaygroundError::MissingCredential(_) => format!(
            "{}\n\nExport the key (e.g. `export GEMINI_API_KEY=...`) or set provider.api_key in config/config.toml.",
            e
        ),
        _ => e.to_string(),
    }
}
