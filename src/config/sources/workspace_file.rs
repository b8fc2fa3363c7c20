//! Workspace config files for a playground checkout.
//!
//! `config/config.toml` holds the shared provider, generation and run
//! defaults for the workspace; `config/{PLAYGROUND_ENV}.toml` (default
//! `development`) overlays per-environment values such as a staging
//! `provider.base_url` or a different model.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

const DEFAULT_ENVIRONMENT: &str = "development";

/// Workspace files in precedence order, lowest first. Missing files are skipped.
pub fn workspace_config_paths(workspace_root: &Path) -> Vec<PathBuf> {
    let config_dir = workspace_root.join("config");
    let environment =
        std::env::var("PLAYGROUND_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

    [
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", environment)),
    ]
    .into_iter()
    .filter(|path| path.is_file())
    .collect()
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(workspace_config_paths(workspace_root)
        .into_iter()
        .fold(builder, |builder, path| {
            builder.add_source(File::from(path).required(false))
        }))
}
