//! Batch outcome statistics.
//!
//! Thread-safe counters for how each input of a batch ended, so parallel
//! workers can record outcomes without locking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::Outcome;

/// Thread-safe per-outcome counters.
///
/// Every `Outcome` variant is initialized to zero on creation. This struct
/// can be shared across rayon workers by reference.
pub struct BatchStats {
    outcomes: HashMap<Outcome, AtomicUsize>,
}

impl BatchStats {
    /// Creates counters for every outcome, all zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in Outcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        BatchStats { outcomes }
    }

    /// Records one finished input.
    pub fn record(&self, outcome: Outcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in BatchStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    ///
    /// Returns 0 if the outcome is not in the map (should never happen if properly initialized).
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of recorded inputs.
    pub fn total(&self) -> usize {
        self.outcomes
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}
