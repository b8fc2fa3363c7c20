//! Response Comparison
//!
//! Folds several prior outputs into one meta-prompt and derives the
//! configuration for the synthesis call. Candidate outputs come from the
//! current ResultSet in batched mode and from the history in single mode.

use crate::session::PlaygroundSession;
use crate::types::{GenerationConfig, RunMode};

/// Identifier shared by every synthesized summary result.
pub const SUMMARY_RESULT_ID: &str = "summary";

/// Output recorded when the synthesis call fails.
pub const SUMMARY_ERROR_OUTPUT: &str = "Error generating comparison summary. Please try again.";

pub const SUMMARY_TEMPERATURE: f64 = 0.5;
pub const SUMMARY_MAX_TOKENS: u32 = 200;

const SYNTHESIS_INSTRUCTION: &str = "Compare the responses above and write the single best, \
most comprehensive response. Combine their strongest points into one cohesive answer.";

/// Outputs eligible for comparison, or `None` when fewer than two are available.
pub fn collect_candidates(session: &PlaygroundSession) -> Option<Vec<String>> {
    let outputs: Vec<String> = match session.mode() {
        RunMode::Batched { .. } => session
            .results()
            .iter()
            .map(|r| r.output().to_string())
            .collect(),
        RunMode::Single => session.history().outputs(),
    };

    if outputs.len() >= 2 {
        Some(outputs)
    } else {
        None
    }
}

/// List each output under a 1-based "Response N:" label, then the synthesis instruction.
pub fn build_meta_prompt<S: AsRef<str>>(outputs: &[S]) -> String {
    let mut prompt = String::from("Here are several responses to the same prompt:\n\n");
    for (index, output) in outputs.iter().enumerate() {
        prompt.push_str(&format!("Response {}:\n{}\n\n", index + 1, output.as_ref()));
    }
    prompt.push_str(SYNTHESIS_INSTRUCTION);
    prompt
}

/// Configuration for the synthesis call. Stop sequences and every other field
/// not listed here carry over from `base`.
pub fn summary_config(base: &GenerationConfig, meta_prompt: String) -> GenerationConfig {
    GenerationConfig {
        system_prompt: String::new(),
        user_prompt: meta_prompt,
        temperature: SUMMARY_TEMPERATURE,
        max_tokens: SUMMARY_MAX_TOKENS,
        ..base.clone()
    }
}
