//! Run command presentation: ResultSet table, analysis and full outputs.

use super::shared::{format_section_heading, preview};
use crate::analysis::ResultAnalysis;
use crate::comparison::SUMMARY_RESULT_ID;
use crate::session::PlaygroundSession;
use crate::types::{GenerationResult, RunMode};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::json;

const PREVIEW_CHARS: usize = 60;

pub fn format_results_text(session: &PlaygroundSession) -> String {
    let results = session.results();
    if results.is_empty() {
        return "No results.".to_string();
    }

    let mut out = String::new();
    let heading = match session.mode() {
        RunMode::Single => "Result".to_string(),
        RunMode::Batched { sample_count } => format!("Batched Results ({} samples)", sample_count),
    };
    let heading = if is_summary(results) {
        "Comparison Summary".to_string()
    } else {
        heading
    };
    out.push_str(&format!("{}\n\n", format_section_heading(&heading)));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "#",
        "Temp",
        "Presence",
        "Frequency",
        "Tokens",
        "Time (ms)",
        "Output",
    ]);
    for (index, result) in results.iter().enumerate() {
        let config = result.config();
        table.add_row(vec![
            (index + 1).to_string(),
            format!("{:.1}", config.temperature),
            format!("{:.1}", config.presence_penalty),
            format!("{:.1}", config.frequency_penalty),
            result.token_count().to_string(),
            result.generation_time_ms().to_string(),
            preview(result.output(), PREVIEW_CHARS),
        ]);
    }
    out.push_str(&format!("{}\n", table));

    if results.len() > 1 {
        let analysis = ResultAnalysis::from_results(results);
        out.push_str(&format!("\n{}\n", format_section_heading("Analysis")));
        out.push_str(&format!(
            "  average tokens: {}\n  average time: {} ms\n  token spread: {}\n  high temperature (>0.8): {}\n  low temperature (<0.5): {}\n",
            analysis.average_tokens,
            analysis.average_generation_time_ms,
            analysis.token_spread,
            analysis.high_temperature_count,
            analysis.low_temperature_count
        ));
    }

    out.push_str(&format!("\n{}\n", format_section_heading("Outputs")));
    for (index, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{} {}\n{}\n",
            format!("[{}]", index + 1).bold(),
            result.id().dimmed(),
            result.output()
        ));
    }

    if session.history().len() > 1 {
        out.push_str(&format!("\nHistory: {} entries\n", session.history().len()));
    }
    out
}

pub fn format_results_json(session: &PlaygroundSession) -> String {
    let results: Vec<_> = session.results().iter().map(result_json).collect();
    let out = json!({
        "mode": session.mode(),
        "results": results,
        "analysis": ResultAnalysis::from_results(session.results()),
        "history_len": session.history().len(),
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

fn result_json(result: &GenerationResult) -> serde_json::Value {
    json!({
        "id": result.id(),
        "config": result.config(),
        "output": result.output(),
        "token_count": result.token_count(),
        "generation_time_ms": result.generation_time_ms(),
        "timestamp": result.timestamp().to_rfc3339(),
    })
}

fn is_summary(results: &[GenerationResult]) -> bool {
    results.len() == 1 && results[0].id() == SUMMARY_RESULT_ID
}
