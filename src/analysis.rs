//! Aggregate statistics over a ResultSet, used by the results presentation.

use crate::types::GenerationResult;
use serde::Serialize;

/// Temperatures above this count as "high" variants.
pub const HIGH_TEMPERATURE_THRESHOLD: f64 = 0.8;
/// Temperatures below this count as "low" variants.
pub const LOW_TEMPERATURE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultAnalysis {
    pub count: usize,
    pub average_tokens: u64,
    pub average_generation_time_ms: u64,
    /// Difference between the largest and smallest token count
    pub token_spread: usize,
    pub high_temperature_count: usize,
    pub low_temperature_count: usize,
}

impl ResultAnalysis {
    pub fn from_results(results: &[GenerationResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let count = results.len();
        let total_tokens: usize = results.iter().map(|r| r.token_count()).sum();
        let total_time: u64 = results.iter().map(|r| r.generation_time_ms()).sum();
        let max_tokens = results.iter().map(|r| r.token_count()).max().unwrap_or(0);
        let min_tokens = results.iter().map(|r| r.token_count()).min().unwrap_or(0);

        Self {
            count,
            average_tokens: (total_tokens as f64 / count as f64).round() as u64,
            average_generation_time_ms: (total_time as f64 / count as f64).round() as u64,
            token_spread: max_tokens - min_tokens,
            high_temperature_count: results
                .iter()
                .filter(|r| r.config().temperature > HIGH_TEMPERATURE_THRESHOLD)
                .count(),
            low_temperature_count: results
                .iter()
                .filter(|r| r.config().temperature < LOW_TEMPERATURE_THRESHOLD)
                .count(),
        }
    }
}
