//! Single-column batch lookups.
//!
//! Cheaper relatives of [`process`](super::process) for callers that only
//! need one answer per input. They share the normalization step and the
//! per-input missing rule of the full pipeline.

use log::debug;

use super::record::HostParts;
use super::split;
use crate::normalize::normalize;
use crate::resolver::{trim_leading_separator, Resolution, SuffixResolver};

fn normalized_or_log(raw: &[u8]) -> Option<String> {
    normalize(raw)
        .map_err(|e| debug!("Skipping unnormalizable input: {e}"))
        .ok()
}

/// Registrable domain of each input.
pub fn apex_domains<R, I, S>(resolver: &R, inputs: I) -> Vec<Option<String>>
where
    R: SuffixResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .map(|raw| {
            let normalized = normalized_or_log(raw.as_ref())?;
            resolver
                .registrable_domain(&normalized)
                .filter(|apex| !apex.is_empty())
        })
        .collect()
}

/// Public suffix of each input, without leading separator.
///
/// Present even when the input has no registrable domain, so `"co.uk"`
/// yields `Some("co.uk")`.
pub fn public_suffixes<R, I, S>(resolver: &R, inputs: I) -> Vec<Option<String>>
where
    R: SuffixResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .map(|raw| {
            let normalized = normalized_or_log(raw.as_ref())?;
            suffix_of(resolver, &normalized)
        })
        .collect()
}

/// Whether each input is itself a public suffix.
///
/// `None` when the input cannot be normalized.
pub fn public_suffix_flags<R, I, S>(resolver: &R, inputs: I) -> Vec<Option<bool>>
where
    R: SuffixResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .map(|raw| {
            let normalized = normalized_or_log(raw.as_ref())?;
            Some(resolver.is_public_suffix(&normalized))
        })
        .collect()
}

/// `(host, subdomain, domain, suffix)` of each input.
///
/// `suffix` is filled whenever one is known; `subdomain` and `domain` only
/// when the input also has a registrable domain.
pub fn host_parts<R, I, S>(resolver: &R, inputs: I) -> Vec<HostParts>
where
    R: SuffixResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let mut parts = HostParts {
                host: String::from_utf8_lossy(raw).into_owned(),
                subdomain: None,
                domain: None,
                suffix: None,
            };
            let Some(normalized) = normalized_or_log(raw) else {
                return parts;
            };
            let Some(suffix) = suffix_of(resolver, &normalized) else {
                return parts;
            };
            parts.suffix = Some(suffix.clone());

            let apex = resolver
                .registrable_domain(&normalized)
                .filter(|apex| !apex.is_empty());
            let decomposed = apex.and_then(|apex| split(&normalized, Resolution { suffix, apex }));
            if let Some(decomposed) = decomposed {
                parts.domain = Some(decomposed.domain().to_string());
                parts.subdomain = Some(decomposed.subdomain().to_string());
            }
            parts
        })
        .collect()
}

fn suffix_of<R>(resolver: &R, normalized: &str) -> Option<String>
where
    R: SuffixResolver + ?Sized,
{
    resolver
        .public_suffix(normalized)
        .map(|suffix| trim_leading_separator(&suffix).to_string())
        .filter(|suffix| !suffix.is_empty())
}
