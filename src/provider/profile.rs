//! Provider settings: which transport to build and how to find its credential.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Supported provider transports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Gemini
    }
}

pub fn provider_kind_slug(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "gemini",
    }
}

/// Provider section of the playground configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub kind: ProviderKind,

    /// Inline API key. Prefer `api_key_env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable consulted when `api_key` is unset
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Endpoint override (e.g. a local proxy or test server)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            api_key: None,
            api_key_env: default_api_key_env(),
            base_url: None,
        }
    }
}

impl ProviderSettings {
    /// Resolve the credential: inline key first, then the configured environment variable.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<SecretString> {
        let inline = self.api_key.clone().filter(|key| !key.trim().is_empty());
        inline
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .map(SecretString::new)
    }

    /// Human-readable credential status without revealing the key.
    pub fn api_key_status(&self) -> String {
        match self.resolve_api_key() {
            Some(key) => format!("set ({} chars)", key.expose_secret().len()),
            None => format!("missing (set {} or provider.api_key)", self.api_key_env),
        }
    }
}
