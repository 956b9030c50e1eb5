//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (markers, intervals, thresholds)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, InputKind, LogFormat, LogLevel, Operation, OutputFormat};
