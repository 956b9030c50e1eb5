//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress information about batch processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Number of inputs processed so far
pub fn log_progress(start_time: Instant, completed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} inputs in {:.2} seconds (~{:.2} inputs/sec)",
        completed, elapsed_secs, rate
    );
}
