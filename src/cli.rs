//! CLI domain: parse, route, output, and presentation only.
//! No orchestration here; the route table drives the engine and formats its state.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, GenerationOverrides, RunArgs};
pub use presentation::{
    format_config_json, format_config_text, format_config_toml, format_results_json,
    format_results_text, format_validation_text,
};
pub use route::RunContext;
