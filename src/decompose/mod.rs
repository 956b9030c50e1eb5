//! Splitting a normalized hostname around its suffix and apex.
//!
//! Given the normalized hostname and the resolver's suffix and apex, the
//! domain label is the apex minus the suffix, and the subdomain is the
//! hostname minus the apex. When an anchor occurs more than once (a label
//! that repeats the suffix text, for instance), the rightmost occurrence is
//! used, since suffix and apex anchor the end of the name.

use crate::error_handling::DecomposeError;
use crate::normalize::SEPARATOR;

/// The two parts computed by [`decompose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// The single label left of the suffix inside the apex.
    pub domain: String,
    /// Everything left of the apex; empty when the hostname is the apex.
    pub subdomain: String,
}

/// Splits `normalized` into domain label and subdomain.
///
/// # Arguments
///
/// * `normalized` - The normalized hostname
/// * `suffix` - Its public suffix, without leading separator
/// * `apex` - Its registrable domain
///
/// # Errors
///
/// Returns `DecomposeError` if `suffix` does not occur in `apex`, or `apex`
/// does not occur in `normalized`. A resolver honoring its contract never
/// triggers either.
pub fn decompose(
    normalized: &str,
    suffix: &str,
    apex: &str,
) -> Result<Decomposition, DecomposeError> {
    let suffix_pos = apex
        .rfind(suffix)
        .ok_or_else(|| DecomposeError::SuffixNotInApex {
            suffix: suffix.to_string(),
            apex: apex.to_string(),
        })?;
    let domain = strip_trailing_separator(&apex[..suffix_pos]);

    let apex_pos = normalized
        .rfind(apex)
        .ok_or_else(|| DecomposeError::ApexNotInHost {
            apex: apex.to_string(),
            normalized: normalized.to_string(),
        })?;
    let subdomain = if apex_pos == 0 {
        ""
    } else {
        strip_trailing_separator(&normalized[..apex_pos])
    };

    Ok(Decomposition {
        domain: domain.to_string(),
        subdomain: subdomain.to_string(),
    })
}

/// Removes exactly one trailing separator, if present.
fn strip_trailing_separator(part: &str) -> &str {
    part.strip_suffix(SEPARATOR).unwrap_or(part)
}
