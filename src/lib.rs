//! Prompt Playground: generate, vary and compare LLM prompt outputs
//!
//! An engine that composes a prompt from a product-parameterized template,
//! sends it to a text-generation provider either once or as a batch of
//! randomized parameter variants, post-processes each output and can
//! synthesize several outputs into a single comparison summary.

pub mod analysis;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod logging;
pub mod postprocess;
pub mod prompt;
pub mod provider;
pub mod sampling;
pub mod session;
pub mod tokens;
pub mod types;

pub use engine::PlaygroundEngine;
pub use error::PlaygroundError;
pub use session::PlaygroundSession;
pub use types::{ConfigUpdate, GenerationConfig, GenerationResult, ResultSet, RunMode};
