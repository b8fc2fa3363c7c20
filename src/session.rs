//! Playground session state
//!
//! Everything the engine reads and writes lives here: the configuration store,
//! run mode, the displayed ResultSet, the single-mode history, the one-level
//! snapshot slot and the advisory busy flag. Operations take the session by
//! `&mut`, so two runs or comparisons can never overlap on the same session.

use crate::config::ConfigStore;
use crate::history::HistoryStore;
use crate::types::{GenerationConfig, ResultSet, RunMode, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Advisory in-progress flag, cloneable so collaborators can poll it while a run is suspended.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag until the returned guard drops.
    pub(crate) fn raise(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(self.clone())
    }
}

/// Clears the busy flag on drop, including on early return and unwinding.
pub(crate) struct BusyGuard(BusyFlag);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct PlaygroundSession {
    pub config: ConfigStore,
    mode: RunMode,
    results: ResultSet,
    history: HistoryStore,
    snapshot: Option<ResultSet>,
    busy: BusyFlag,
}

impl PlaygroundSession {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config: ConfigStore::new(config),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Set the run mode. Batched sample counts outside [2, 12] are clamped.
    pub fn set_mode(&mut self, mode: RunMode) {
        self.mode = match mode {
            RunMode::Batched { sample_count } => RunMode::Batched {
                sample_count: clamp_sample_count(sample_count),
            },
            RunMode::Single => RunMode::Single,
        };
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Handle for observing the busy flag from outside the session borrow.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Store (overwriting any previous snapshot) and return a copy of the current ResultSet.
    pub fn snapshot(&mut self) -> ResultSet {
        let captured = self.results.clone();
        self.snapshot = Some(captured.clone());
        captured
    }

    /// Replace the ResultSet with the stored snapshot. Returns false when nothing was captured.
    /// The snapshot stays stored, so restoring twice yields the same ResultSet.
    pub fn restore(&mut self) -> bool {
        match &self.snapshot {
            Some(saved) => {
                self.results = saved.clone();
                true
            }
            None => false,
        }
    }

    pub fn saved_snapshot(&self) -> Option<&ResultSet> {
        self.snapshot.as_ref()
    }

    pub(crate) fn raise_busy(&self) -> BusyGuard {
        self.busy.raise()
    }

    pub(crate) fn replace_results(&mut self, results: ResultSet) {
        self.results = results;
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }
}

pub(crate) fn clamp_sample_count(requested: usize) -> usize {
    let clamped = requested.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT);
    if clamped != requested {
        warn!(
            requested,
            clamped,
            "Sample count outside [{}, {}]; clamping",
            MIN_SAMPLE_COUNT,
            MAX_SAMPLE_COUNT
        );
    }
    clamped
}
