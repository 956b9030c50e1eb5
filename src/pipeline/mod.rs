//! The normalize → resolve → decompose pipeline.
//!
//! Each input is processed on its own: normalization, suffix resolution, then
//! decomposition. Failures never abort a batch; they become missing fields on
//! that input's record. Output order always matches input order.

mod lookups;
mod record;

use log::{debug, warn};
use rayon::prelude::*;

use crate::decompose::decompose;
use crate::normalize::normalize;
use crate::resolver::{Resolution, SuffixResolver};

// Re-export public API
pub use lookups::{apex_domains, host_parts, public_suffix_flags, public_suffixes};
pub use record::{DomainParts, DomainRecord, HostParts};

/// Runs the pipeline on one raw input.
///
/// # Arguments
///
/// * `resolver` - The suffix resolver
/// * `raw` - The raw input, expected to be UTF-8
///
/// # Returns
///
/// A record with every field the input allows. Never fails.
pub fn extract<R>(resolver: &R, raw: &[u8]) -> DomainRecord
where
    R: SuffixResolver + ?Sized,
{
    let original = String::from_utf8_lossy(raw).into_owned();

    let normalized = match normalize(raw) {
        Ok(normalized) => normalized,
        Err(e) => {
            debug!("Skipping unnormalizable input '{original}': {e}");
            return DomainRecord::unnormalizable(original);
        }
    };

    let Some(resolution) = resolver.resolve(&normalized) else {
        debug!("No registrable domain for '{normalized}'");
        return DomainRecord::unresolved(original, normalized);
    };

    match split(&normalized, resolution) {
        Some(parts) => DomainRecord::resolved(original, normalized, parts),
        None => DomainRecord::unresolved(original, normalized),
    }
}

/// Decomposes a resolver answer, rejecting answers that break the
/// trailing-substring invariants.
pub(crate) fn split(normalized: &str, resolution: Resolution) -> Option<DomainParts> {
    let Resolution { suffix, apex } = resolution;
    if !normalized.ends_with(apex.as_str()) || !apex.ends_with(suffix.as_str()) {
        warn!(
            "Resolver returned inconsistent parts for '{normalized}' (apex '{apex}', suffix '{suffix}')"
        );
        return None;
    }
    match decompose(normalized, &suffix, &apex) {
        Ok(d) => Some(DomainParts::new(suffix, apex, d.domain, d.subdomain)),
        Err(e) => {
            warn!("Failed to decompose '{normalized}': {e}");
            None
        }
    }
}

/// Runs the pipeline on every input, in order.
///
/// # Examples
///
/// ```
/// use domain_parts::{process, PslResolver};
///
/// let records = process(&PslResolver::new(), ["WWW.Example.COM.", "localhost"]);
/// assert_eq!(records[0].subdomain(), Some("www"));
/// assert_eq!(records[0].apex(), Some("example.com"));
/// assert_eq!(records[1].normalized(), Some("localhost"));
/// assert_eq!(records[1].apex(), None);
/// ```
pub fn process<R, I, S>(resolver: &R, inputs: I) -> Vec<DomainRecord>
where
    R: SuffixResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .map(|raw| extract(resolver, raw.as_ref()))
        .collect()
}

/// Runs the pipeline across the rayon thread pool.
///
/// Produces exactly what [`process`] produces for the same inputs.
pub fn process_parallel<R, S>(resolver: &R, inputs: &[S]) -> Vec<DomainRecord>
where
    R: SuffixResolver + ?Sized,
    S: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|raw| extract(resolver, raw.as_ref()))
        .collect()
}
