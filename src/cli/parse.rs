//! CLI parse: clap types for the playground. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Prompt Playground CLI - generate, vary and compare prompt outputs
#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Run prompts with parameter variations and synthesize the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/config.toml is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate output for the current configuration
    Run(RunArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Run in batched mode with randomized parameter variants
    #[arg(long)]
    pub batched: bool,

    /// Number of batched samples (2-12)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Seed for reproducible variants
    #[arg(long)]
    pub seed: Option<u64>,

    /// Repeat single-mode runs to build history
    #[arg(long, default_value = "1")]
    pub repeat: usize,

    /// Synthesize the outputs into one summary after running
    #[arg(long)]
    pub compare: bool,

    /// Restore the pre-comparison results before printing
    #[arg(long, requires = "compare")]
    pub restore: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    #[command(flatten)]
    pub overrides: GenerationOverrides,
}

/// Per-invocation generation settings, merged over the configured ones
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationOverrides {
    /// Product name substituted into the user prompt
    #[arg(long)]
    pub product: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub system_prompt: Option<String>,

    /// User prompt template containing {product_name}
    #[arg(long)]
    pub user_prompt: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub max_tokens: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub presence_penalty: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub frequency_penalty: Option<f64>,

    /// Comma-separated stop sequences
    #[arg(long)]
    pub stop: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output format (text, json or toml)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check configured values against their intended ranges
    Validate,
}
