//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{BatchStats, Outcome};

/// Logs per-outcome counts for a finished batch.
pub fn print_batch_statistics(stats: &BatchStats) {
    let total = stats.total();
    info!("Outcome Counts ({} total):", total);
    for outcome in Outcome::iter() {
        let count = stats.count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// Logs a one-line summary of the run.
pub fn print_simple_summary(total: usize, resolved: usize, elapsed_seconds: f64) {
    info!(
        "Processed {} input{} ({} resolved, {} unresolved) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        resolved,
        total - resolved,
        elapsed_seconds
    );
}
