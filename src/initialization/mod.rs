//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - Suffix resolver
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::resolver::PslResolver;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List resolver.
///
/// The list is compiled into the binary, so this cannot fail. The resolver
/// is read-only and shared by every worker of a batch.
///
/// # Arguments
///
/// * `config` - Supplies the unknown-suffix policy
///
/// # Returns
///
/// An `Arc<PslResolver>` that can be shared across threads.
pub fn init_resolver(config: &Config) -> Arc<PslResolver> {
    Arc::new(PslResolver::new().with_unknown_suffixes(config.allow_unknown_suffixes))
}
