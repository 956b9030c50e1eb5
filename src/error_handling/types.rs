//! Error type definitions.
//!
//! This module defines the per-element errors of the decomposition pipeline,
//! initialization errors, and the outcome categories used for batch statistics.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A raw input that could not be case-folded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
}

/// A resolver answer that cannot be used to split the hostname.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// The suffix does not occur inside the apex.
    #[error("suffix '{suffix}' does not occur in apex '{apex}'")]
    SuffixNotInApex {
        /// Suffix reported by the resolver
        suffix: String,
        /// Apex reported by the resolver
        apex: String,
    },

    /// The apex does not occur inside the normalized hostname.
    #[error("apex '{apex}' does not occur in '{normalized}'")]
    ApexNotInHost {
        /// Apex reported by the resolver
        apex: String,
        /// Normalized hostname
        normalized: String,
    },
}

/// How the pipeline finished for a single input.
///
/// Every input ends in exactly one outcome; none of them abort the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Outcome {
    /// All fields populated.
    Resolved,
    /// Normalized, but the resolver found no registrable domain.
    NoSuffixMatch,
    /// The input could not be normalized; every derived field is missing.
    NormalizeFailed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Resolved => "resolved",
            Outcome::NoSuffixMatch => "no suffix match",
            Outcome::NormalizeFailed => "normalization failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_error_display() {
        let err = NormalizeError::InvalidUtf8 { valid_up_to: 4 };
        assert_eq!(
            err.to_string(),
            "input is not valid UTF-8 (valid up to byte 4)"
        );
    }

    #[test]
    fn test_decompose_error_display() {
        let err = DecomposeError::ApexNotInHost {
            apex: "example.com".to_string(),
            normalized: "www.example.org".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "apex 'example.com' does not occur in 'www.example.org'"
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Resolved.to_string(), "resolved");
        assert_eq!(Outcome::NoSuffixMatch.to_string(), "no suffix match");
        assert_eq!(Outcome::NormalizeFailed.to_string(), "normalization failed");
    }
}
