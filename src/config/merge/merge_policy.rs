//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override these key by key; tables merge rather than replace,
/// so a workspace file setting only `generation.product_name` keeps every other default.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.kind", "gemini")?
        .set_default("provider.api_key_env", "GEMINI_API_KEY")?
        .set_default("run.batched", false)?
        .set_default("run.sample_count", 6)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
