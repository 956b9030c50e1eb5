//! Output records of the decomposition pipeline.

use crate::error_handling::Outcome;

/// The suffix-relative parts of a resolved hostname.
///
/// These four fields are either all present or all missing on a
/// [`DomainRecord`], so they live together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    suffix: String,
    apex: String,
    domain: String,
    subdomain: String,
}

impl DomainParts {
    pub(crate) fn new(suffix: String, apex: String, domain: String, subdomain: String) -> Self {
        Self {
            suffix,
            apex,
            domain,
            subdomain,
        }
    }

    /// Public suffix, e.g. "co.uk".
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Registrable domain, e.g. "example.co.uk".
    pub fn apex(&self) -> &str {
        &self.apex
    }

    /// Label left of the suffix, e.g. "example".
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Everything left of the apex, e.g. "www". Empty when the host is the apex.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }
}

/// The decomposition of one input hostname.
///
/// Records are produced only by the pipeline and are immutable. A missing
/// field is `None`; an empty subdomain is a present value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    original: String,
    normalized: Option<String>,
    parts: Option<DomainParts>,
}

impl DomainRecord {
    pub(crate) fn unnormalizable(original: String) -> Self {
        Self {
            original,
            normalized: None,
            parts: None,
        }
    }

    pub(crate) fn unresolved(original: String, normalized: String) -> Self {
        Self {
            original,
            normalized: Some(normalized),
            parts: None,
        }
    }

    pub(crate) fn resolved(original: String, normalized: String, parts: DomainParts) -> Self {
        Self {
            original,
            normalized: Some(normalized),
            parts: Some(parts),
        }
    }

    /// The input as given. Invalid UTF-8 is rendered with replacement characters.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercased input without its root separator; `None` if it was not UTF-8.
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    /// Suffix, apex, domain and subdomain together, if resolved.
    pub fn parts(&self) -> Option<&DomainParts> {
        self.parts.as_ref()
    }

    /// See [`DomainParts::suffix`].
    pub fn suffix(&self) -> Option<&str> {
        self.parts.as_ref().map(DomainParts::suffix)
    }

    /// See [`DomainParts::apex`].
    pub fn apex(&self) -> Option<&str> {
        self.parts.as_ref().map(DomainParts::apex)
    }

    /// See [`DomainParts::domain`].
    pub fn domain(&self) -> Option<&str> {
        self.parts.as_ref().map(DomainParts::domain)
    }

    /// See [`DomainParts::subdomain`].
    pub fn subdomain(&self) -> Option<&str> {
        self.parts.as_ref().map(DomainParts::subdomain)
    }

    /// How the pipeline finished for this input.
    pub fn outcome(&self) -> Outcome {
        match (&self.normalized, &self.parts) {
            (None, _) => Outcome::NormalizeFailed,
            (Some(_), None) => Outcome::NoSuffixMatch,
            (Some(_), Some(_)) => Outcome::Resolved,
        }
    }
}

/// The `(host, subdomain, domain, suffix)` shape of the compatibility lookup.
///
/// Unlike [`DomainRecord`], `suffix` may be present while `domain` and
/// `subdomain` are missing (a host that is itself a public suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// The input as given.
    pub host: String,
    /// Everything left of the apex
    pub subdomain: Option<String>,
    /// Label left of the suffix
    pub domain: Option<String>,
    /// Public suffix
    pub suffix: Option<String>,
}
