//! CLI route: single route table and run context. Dispatches to the engine and presentation.

use crate::config::{ConfigLoader, PlaygroundConfig};
use crate::engine::PlaygroundEngine;
use crate::error::PlaygroundError;
use crate::postprocess::parse_stop_sequences;
use crate::provider::{GenerationProvider, ProviderFactory};
use crate::sampling::VariantSampler;
use crate::session::PlaygroundSession;
use crate::types::{ConfigUpdate, RunMode};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::parse::{Commands, ConfigCommands, GenerationOverrides, RunArgs};
use crate::cli::presentation::{
    format_config_json, format_config_text, format_config_toml, format_results_json,
    format_results_text, format_validation_text,
};

/// Runtime context for CLI execution: the loaded configuration and, optionally,
/// a provider that replaces the one the configuration would build.
pub struct RunContext {
    config: PlaygroundConfig,
    workspace_root: PathBuf,
    provider: Option<Arc<dyn GenerationProvider>>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, PlaygroundError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_config(config, workspace_root))
    }

    pub fn from_config(config: PlaygroundConfig, workspace_root: PathBuf) -> Self {
        Self {
            config,
            workspace_root,
            provider: None,
        }
    }

    /// Use `provider` for generation instead of building one from the provider settings.
    pub fn with_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> Result<String, PlaygroundError> {
        let started = Instant::now();
        let result = match command {
            Commands::Run(args) => self.handle_run(args).await,
            Commands::Config { command } => self.handle_config(command),
        };
        debug!(
            workspace = %self.workspace_root.display(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn handle_run(&self, args: &RunArgs) -> Result<String, PlaygroundError> {
        let mut session = self.build_session(args);
        let engine = self.build_engine(args)?;

        let repeat = if session.mode().is_batched() {
            1
        } else {
            args.repeat.max(1)
        };
        for _ in 0..repeat {
            engine.run(&mut session).await?;
        }

        if args.compare {
            engine.compare(&mut session).await?;
            if args.restore && session.restore() {
                info!("Restored results captured before comparison");
            }
        }

        if args.format == "json" {
            Ok(format_results_json(&session))
        } else {
            Ok(format_results_text(&session))
        }
    }

    fn handle_config(&self, command: &ConfigCommands) -> Result<String, PlaygroundError> {
        match command {
            ConfigCommands::Show { format } => match format.as_str() {
                "json" => Ok(format_config_json(&self.config)),
                "toml" => format_config_toml(&self.config),
                _ => Ok(format_config_text(&self.config)),
            },
            ConfigCommands::Validate => {
                let result = self.config.validate();
                let text = format_validation_text(&result);
                match result {
                    Ok(()) => Ok(text),
                    Err(_) => Err(PlaygroundError::ConfigError(text)),
                }
            }
        }
    }

    fn build_session(&self, args: &RunArgs) -> PlaygroundSession {
        let mut session = PlaygroundSession::new(self.config.generation.clone());
        let update = overrides_to_update(&args.overrides);
        if !update.is_empty() {
            session.config.update(update);
        }

        let mode = if args.batched || args.samples.is_some() {
            RunMode::Batched {
                sample_count: args.samples.unwrap_or(self.config.run.sample_count),
            }
        } else {
            self.config.run.mode()
        };
        session.set_mode(mode);
        session
    }

    fn build_engine(&self, args: &RunArgs) -> Result<PlaygroundEngine, PlaygroundError> {
        let provider = match &self.provider {
            Some(provider) => Arc::clone(provider),
            None => ProviderFactory::create(&self.config.provider)?,
        };
        let sampler = match args.seed.or(self.config.run.seed) {
            Some(seed) => VariantSampler::with_seed(seed),
            None => VariantSampler::new(),
        };
        Ok(PlaygroundEngine::with_sampler(provider, sampler))
    }
}

fn overrides_to_update(overrides: &GenerationOverrides) -> ConfigUpdate {
    ConfigUpdate {
        model: overrides.model.clone(),
        system_prompt: overrides.system_prompt.clone(),
        user_prompt: overrides.user_prompt.clone(),
        temperature: overrides.temperature,
        max_tokens: overrides.max_tokens,
        presence_penalty: overrides.presence_penalty,
        frequency_penalty: overrides.frequency_penalty,
        stop_sequences: overrides.stop.as_deref().map(parse_stop_sequences),
        product_name: overrides.product.clone(),
    }
}
