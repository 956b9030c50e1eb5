//! Error handling and batch statistics.
//!
//! This module provides:
//! - Error types for normalization, decomposition and initialization
//! - The `Outcome` categories every input ends in
//! - Thread-safe outcome counters for a batch
//!
//! Per-input failures never abort a batch. They are recovered into missing
//! fields and counted here.

mod stats;
mod types;

// Re-export public API
pub use stats::BatchStats;
pub use types::{DecomposeError, InitializationError, NormalizeError, Outcome};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_batch_stats_initialization() {
        let stats = BatchStats::new();
        for outcome in Outcome::iter() {
            assert_eq!(stats.count(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_batch_stats_record() {
        let stats = BatchStats::new();
        stats.record(Outcome::Resolved);
        stats.record(Outcome::Resolved);
        stats.record(Outcome::NoSuffixMatch);

        assert_eq!(stats.count(Outcome::Resolved), 2);
        assert_eq!(stats.count(Outcome::NoSuffixMatch), 1);
        assert_eq!(stats.count(Outcome::NormalizeFailed), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_batch_stats_shared_across_threads() {
        let stats = BatchStats::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        stats.record(Outcome::NormalizeFailed);
                    }
                });
            }
        });
        assert_eq!(stats.count(Outcome::NormalizeFailed), 1000);
    }
}
