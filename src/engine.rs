//! Generation Orchestration
//!
//! Drives single-shot and batched runs plus response comparison against a
//! [`GenerationProvider`]. Calls are issued strictly one at a time; batched
//! samples run sequentially and each failed call becomes a sentinel result
//! instead of aborting the batch. Only the credential check made before the
//! first call can abort, and it leaves no partial results behind.

use crate::comparison::{
    build_meta_prompt, collect_candidates, summary_config, SUMMARY_ERROR_OUTPUT, SUMMARY_RESULT_ID,
};
use crate::error::PlaygroundError;
use crate::postprocess::trim_at_stop_sequences;
use crate::prompt::compose_prompt;
use crate::provider::{GenerationParams, GenerationProvider};
use crate::sampling::VariantSampler;
use crate::session::PlaygroundSession;
use crate::tokens::count_tokens;
use crate::types::{GenerationConfig, GenerationResult, RunMode};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Output recorded when a generation call fails.
pub const GENERATION_ERROR_OUTPUT: &str =
    "Error generating content. Please check your API key and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultKind {
    Sample,
    Summary,
}

pub struct PlaygroundEngine {
    provider: Arc<dyn GenerationProvider>,
    sampler: Mutex<VariantSampler>,
}

impl PlaygroundEngine {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self::with_sampler(provider, VariantSampler::new())
    }

    /// Engine with an explicit sampler, e.g. [`VariantSampler::with_seed`] for reproducible batches.
    pub fn with_sampler(provider: Arc<dyn GenerationProvider>, sampler: VariantSampler) -> Self {
        Self {
            provider,
            sampler: Mutex::new(sampler),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Run the session's current mode against its current configuration.
    ///
    /// Clears the ResultSet first. Batched mode fills it with one result per
    /// sample in call order; single mode sets it to one result and appends the
    /// same result to the history. The busy flag is cleared on every exit path.
    pub async fn run(&self, session: &mut PlaygroundSession) -> Result<(), PlaygroundError> {
        let _busy = session.raise_busy();
        session.replace_results(Vec::new());

        let base = session.config.get();
        let mode = session.mode();
        self.provider.check_credentials()?;

        info!(
            provider = self.provider_name(),
            model = %base.model,
            ?mode,
            "Run started"
        );

        match mode {
            RunMode::Batched { sample_count } => {
                let mut results = Vec::with_capacity(sample_count);
                for index in 0..sample_count {
                    let variant = self.sampler.lock().variant(&base);
                    debug!(
                        sample = index + 1,
                        total = sample_count,
                        temperature = variant.temperature,
                        presence_penalty = variant.presence_penalty,
                        frequency_penalty = variant.frequency_penalty,
                        "Generating sample"
                    );
                    results.push(self.generate(variant, ResultKind::Sample).await);
                }
                info!(results = results.len(), "Batched run completed");
                session.replace_results(results);
            }
            RunMode::Single => {
                let result = self.generate(base, ResultKind::Sample).await;
                session.replace_results(vec![result.clone()]);
                session.history_mut().append(result);
                info!(history = session.history().len(), "Single run completed");
            }
        }

        Ok(())
    }

    /// Synthesize the available outputs into one summary result.
    ///
    /// A no-op when fewer than two candidate outputs exist. Otherwise the
    /// current ResultSet is snapshotted and then replaced by the summary; the
    /// history is never touched.
    pub async fn compare(&self, session: &mut PlaygroundSession) -> Result<(), PlaygroundError> {
        let outputs = match collect_candidates(session) {
            Some(outputs) => outputs,
            None => {
                debug!(mode = ?session.mode(), "Fewer than two outputs available; comparison skipped");
                return Ok(());
            }
        };

        let _busy = session.raise_busy();
        self.provider.check_credentials()?;
        session.snapshot();

        info!(candidates = outputs.len(), "Comparison started");
        let config = summary_config(&session.config.get(), build_meta_prompt(&outputs));
        let summary = self.generate(config, ResultKind::Summary).await;
        session.replace_results(vec![summary]);
        info!("Comparison completed");

        Ok(())
    }

    /// One provider call turned into a result record. Any provider error,
    /// whatever its kind, becomes a sentinel result.
    async fn generate(&self, config: GenerationConfig, kind: ResultKind) -> GenerationResult {
        let prompt = compose_prompt(&config);
        let params = GenerationParams::from(&config);
        let started = Instant::now();

        match self.provider.generate(&prompt, &params).await {
            Ok(raw) => {
                let output = trim_at_stop_sequences(&raw, &config.stop_sequences).to_string();
                let token_count = count_tokens(&output);
                let elapsed_ms = match kind {
                    ResultKind::Sample => {
                        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
                    }
                    ResultKind::Summary => 0,
                };
                GenerationResult::new(result_id(kind), config, output, token_count, elapsed_ms)
            }
            Err(err) => {
                warn!(provider = self.provider_name(), error = %err, "Generation call failed");
                let sentinel = match kind {
                    ResultKind::Sample => GENERATION_ERROR_OUTPUT,
                    ResultKind::Summary => SUMMARY_ERROR_OUTPUT,
                };
                GenerationResult::new(result_id(kind), config, sentinel.to_string(), 0, 0)
            }
        }
    }
}

fn result_id(kind: ResultKind) -> String {
    match kind {
        ResultKind::Sample => uuid::Uuid::new_v4().to_string(),
        ResultKind::Summary => SUMMARY_RESULT_ID.to_string(),
    }
}
