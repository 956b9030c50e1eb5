//! Hostname normalization.
//!
//! Turns a raw candidate hostname into the canonical form the suffix
//! resolver expects:
//! - one trailing `.` (root label separator) is removed
//! - the text is lowercased with Unicode-aware case mapping
//!
//! No IDNA transcoding or hostname validation happens here.

use crate::error_handling::NormalizeError;

/// Label separator in hostnames.
pub const SEPARATOR: char = '.';

/// Normalizes a raw hostname given as bytes.
///
/// # Arguments
///
/// * `raw` - The raw input, expected to be UTF-8
///
/// # Returns
///
/// The hostname with a single trailing `.` removed and lowercased.
///
/// # Errors
///
/// Returns `NormalizeError::InvalidUtf8` if `raw` is not valid UTF-8, since
/// case mapping is only defined on text.
pub fn normalize(raw: &[u8]) -> Result<String, NormalizeError> {
    let text = std::str::from_utf8(raw).map_err(|e| NormalizeError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(normalize_str(text))
}

/// Normalizes a hostname that is already known to be valid UTF-8.
///
/// This is infallible; see [`normalize`] for the byte-level entry point.
pub fn normalize_str(raw: &str) -> String {
    strip_root_separator(raw).to_lowercase()
}

/// Removes exactly one trailing separator, if present.
fn strip_root_separator(raw: &str) -> &str {
    raw.strip_suffix(SEPARATOR).unwrap_or(raw)
}
