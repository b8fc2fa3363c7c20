//! Variant sampling for batched runs.
//!
//! Each batched sample draws temperature and both penalties independently,
//! rounded to one decimal.

use crate::types::GenerationConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;
pub const PENALTY_RANGE: RangeInclusive<f64> = -2.0..=2.0;

/// Seedable source of randomized variant configurations.
pub struct VariantSampler {
    rng: StdRng,
}

impl VariantSampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sampler.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derive a variant of `base` with randomized temperature and penalties.
    pub fn variant(&mut self, base: &GenerationConfig) -> GenerationConfig {
        let temperature = self.draw(TEMPERATURE_RANGE);
        let presence_penalty = self.draw(PENALTY_RANGE);
        let frequency_penalty = self.draw(PENALTY_RANGE);

        GenerationConfig {
            temperature,
            presence_penalty,
            frequency_penalty,
            ..base.clone()
        }
    }

    fn draw(&mut self, range: RangeInclusive<f64>) -> f64 {
        let (low, high) = (*range.start(), *range.end());
        round_one_decimal(self.rng.gen_range(range)).clamp(low, high)
    }
}

impl Default for VariantSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
