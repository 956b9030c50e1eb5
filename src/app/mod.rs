//! Main application modules.
//!
//! This module provides input reading, URL host extraction, progress logging
//! and statistics printing used by the run loop.

pub mod input;
pub mod logging;
pub mod statistics;
pub mod url;

// Re-export public API
pub use input::read_inputs;
pub use logging::log_progress;
pub use statistics::{print_batch_statistics, print_simple_summary};
pub use self::url::host_from_url;
