//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from configuration, overridable through `PLAYGROUND_LOG*` environment
//! variables. Defaults to stderr so command output on stdout stays clean.

use crate::error::PlaygroundError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format, terminal destinations only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(".playground/playground.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputDestination {
    Stdout,
    Stderr,
    File,
}

/// Install the global subscriber.
///
/// `PLAYGROUND_LOG`, `PLAYGROUND_LOG_FORMAT` and `PLAYGROUND_LOG_OUTPUT` win over
/// `config`, which in turn wins over the defaults. Fails if a subscriber is
/// already installed.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), PlaygroundError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let filter = build_env_filter(config)?;
    let format = resolve_format(config)?;
    let destination = resolve_destination(config)?;
    let writer = make_writer(destination, &config.file)?;
    let ansi = config.color && destination != OutputDestination::File;

    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init(),
    };
    installed.map_err(|e| PlaygroundError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn make_writer(
    destination: OutputDestination,
    file: &Path,
) -> Result<BoxMakeWriter, PlaygroundError> {
    match destination {
        OutputDestination::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
        OutputDestination::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        OutputDestination::File => {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PlaygroundError::ConfigError(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .map_err(|e| {
                    PlaygroundError::ConfigError(format!(
                        "Failed to open log file {}: {}",
                        file.display(),
                        e
                    ))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(handle)))
        }
    }
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, PlaygroundError> {
    if let Ok(filter) = EnvFilter::try_from_env("PLAYGROUND_LOG") {
        return Ok(filter);
    }
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut directives: Vec<String> = config
        .modules
        .iter()
        .map(|(module, level)| format!("{}={}", module, level))
        .collect();
    if let Ok(raw) = std::env::var("PLAYGROUND_LOG_MODULES") {
        directives.extend(
            raw.split(',')
                .filter_map(|entry| entry.split_once('='))
                .map(|(module, level)| format!("{}={}", module.trim(), level.trim())),
        );
    }

    let mut filter = EnvFilter::new(&config.level);
    for directive in directives {
        let parsed = directive.parse().map_err(|e| {
            PlaygroundError::ConfigError(format!("Invalid log directive '{}': {}", directive, e))
        })?;
        filter = filter.add_directive(parsed);
    }
    Ok(filter)
}

fn resolve_format(config: &LoggingConfig) -> Result<LogFormat, PlaygroundError> {
    let raw = std::env::var("PLAYGROUND_LOG_FORMAT").unwrap_or_else(|_| config.format.clone());
    parse_format(&raw)
}

fn parse_format(raw: &str) -> Result<LogFormat, PlaygroundError> {
    match raw {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(PlaygroundError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn resolve_destination(config: &LoggingConfig) -> Result<OutputDestination, PlaygroundError> {
    let raw = std::env::var("PLAYGROUND_LOG_OUTPUT").unwrap_or_else(|_| config.output.clone());
    parse_output_destination(&raw)
}

fn parse_output_destination(output: &str) -> Result<OutputDestination, PlaygroundError> {
    match output {
        "stdout" => Ok(OutputDestination::Stdout),
        "stderr" => Ok(OutputDestination::Stderr),
        "file" => Ok(OutputDestination::File),
        _ => Err(PlaygroundError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
            output
        ))),
    }
}
