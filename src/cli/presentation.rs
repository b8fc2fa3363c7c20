//! CLI presentation: text and json formatters per command family.

mod config;
mod results;
mod shared;

pub use config::{
    format_config_json, format_config_text, format_config_toml, format_validation_text,
};
pub use results::{format_results_json, format_results_text};
