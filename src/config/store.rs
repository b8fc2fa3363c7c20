//! In-memory holder of the current generation configuration.

use crate::types::{ConfigUpdate, GenerationConfig};

/// Current generation configuration with partial-merge updates.
///
/// No validation happens here; callers own range checks.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: GenerationConfig,
}

impl ConfigStore {
    pub fn new(config: GenerationConfig) -> Self {
        Self { current: config }
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> GenerationConfig {
        self.current.clone()
    }

    /// Merge `update` over the current configuration.
    pub fn update(&mut self, update: ConfigUpdate) {
        update.apply_to(&mut self.current);
    }
}
