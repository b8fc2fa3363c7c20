//! Append-only log of single-mode results.

use crate::types::GenerationResult;

/// Grows monotonically; there is no API to remove or reorder entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<GenerationResult>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: GenerationResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GenerationResult] {
        &self.entries
    }

    pub fn outputs(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.output().to_string()).collect()
    }
}
