//! Public suffix resolution.
//!
//! The suffix matching engine is an injected, read-only dependency. The
//! pipeline only talks to it through [`SuffixResolver`], so tests can swap in
//! a fixed rule set and callers can share one resolver across threads.
//!
//! [`PslResolver`] is the production implementation, backed by the list
//! compiled into the `psl` crate.

use psl::{List, Psl};

use crate::normalize::SEPARATOR;

/// The public suffix and registrable domain of a normalized hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Public suffix, without a leading separator (e.g. "co.uk").
    pub suffix: String,
    /// Registrable domain: the suffix plus one label (e.g. "example.co.uk").
    pub apex: String,
}

/// Read-only access to a Public Suffix List.
///
/// Implementations receive hostnames that have already been normalized
/// (lowercased, one trailing separator removed). They must be safe for
/// concurrent readers.
pub trait SuffixResolver: Send + Sync {
    /// Returns the public suffix of `normalized`, or `None` if no rule applies.
    fn public_suffix(&self, normalized: &str) -> Option<String>;

    /// Returns the registrable domain of `normalized`, or `None` if the name
    /// has no label left of its public suffix.
    fn registrable_domain(&self, normalized: &str) -> Option<String>;

    /// Whether `normalized` is itself a public suffix.
    fn is_public_suffix(&self, normalized: &str) -> bool {
        !normalized.is_empty()
            && self
                .public_suffix(normalized)
                .is_some_and(|suffix| trim_leading_separator(&suffix) == normalized)
    }

    /// Returns both the suffix and the apex, or `None` if either is missing.
    ///
    /// An empty suffix or apex counts as missing.
    fn resolve(&self, normalized: &str) -> Option<Resolution> {
        let suffix = self.public_suffix(normalized)?;
        let suffix = trim_leading_separator(&suffix);
        if suffix.is_empty() {
            return None;
        }
        let apex = self.registrable_domain(normalized)?;
        if apex.is_empty() {
            return None;
        }
        Some(Resolution {
            suffix: suffix.to_string(),
            apex,
        })
    }
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for &R {
    fn public_suffix(&self, normalized: &str) -> Option<String> {
        (**self).public_suffix(normalized)
    }

    fn registrable_domain(&self, normalized: &str) -> Option<String> {
        (**self).registrable_domain(normalized)
    }

    fn is_public_suffix(&self, normalized: &str) -> bool {
        (**self).is_public_suffix(normalized)
    }

    fn resolve(&self, normalized: &str) -> Option<Resolution> {
        (**self).resolve(normalized)
    }
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for std::sync::Arc<R> {
    fn public_suffix(&self, normalized: &str) -> Option<String> {
        (**self).public_suffix(normalized)
    }

    fn registrable_domain(&self, normalized: &str) -> Option<String> {
        (**self).registrable_domain(normalized)
    }

    fn is_public_suffix(&self, normalized: &str) -> bool {
        (**self).is_public_suffix(normalized)
    }

    fn resolve(&self, normalized: &str) -> Option<Resolution> {
        (**self).resolve(normalized)
    }
}

/// Removes one leading separator, if present.
pub(crate) fn trim_leading_separator(suffix: &str) -> &str {
    suffix.strip_prefix(SEPARATOR).unwrap_or(suffix)
}

/// Suffix resolver backed by the Public Suffix List compiled into `psl`.
///
/// By default only suffixes matched by an explicit list rule are accepted.
/// With `allow_unknown_suffixes`, the implicit `*` rule applies and any
/// unlisted top-level label counts as a suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver {
    allow_unknown_suffixes: bool,
}

impl PslResolver {
    /// Creates a resolver that only accepts listed suffixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unlisted top-level labels count as suffixes.
    pub fn with_unknown_suffixes(mut self, allow: bool) -> Self {
        self.allow_unknown_suffixes = allow;
        self
    }

    /// Whether unlisted top-level labels count as suffixes.
    pub fn allows_unknown_suffixes(&self) -> bool {
        self.allow_unknown_suffixes
    }
}

impl SuffixResolver for PslResolver {
    fn public_suffix(&self, normalized: &str) -> Option<String> {
        if normalized.is_empty() {
            return None;
        }
        let suffix = List.suffix(normalized.as_bytes())?;
        if !suffix.is_known() && !self.allow_unknown_suffixes {
            return None;
        }
        Some(String::from_utf8_lossy(suffix.as_bytes()).into_owned())
    }

    fn registrable_domain(&self, normalized: &str) -> Option<String> {
        if normalized.is_empty() {
            return None;
        }
        let domain = List.domain(normalized.as_bytes())?;
        if !domain.suffix().is_known() && !self.allow_unknown_suffixes {
            return None;
        }
        Some(String::from_utf8_lossy(domain.as_bytes()).into_owned())
    }
}


#[cfg(test)]
mod tests {
    include!("tests.rs");
}
