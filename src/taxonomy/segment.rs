//! Path segment splitting and normalization
//!
//! Category names become directory names verbatim, so every name is checked
//! before it reaches the filesystem. Names typed by the user or pulled out of
//! file names are also trimmed and normalized to NFC so that visually equal
//! names do not create sibling directories.

use crate::error::TaxonomyError;
use unicode_normalization::UnicodeNormalization;

/// Split a slash-separated path into normalized segments, dropping empty ones.
///
/// `" J-Pop / J-Rock/"` becomes `["J-Pop", "J-Rock"]`.
pub fn split_path(path: &str) -> Result<Vec<String>, TaxonomyError> {
    path.split('/')
        .map(normalize_segment)
        .filter(|s| !s.is_empty())
        .map(|s| {
            validate_segment(&s)?;
            Ok(s)
        })
        .collect()
}

/// Trim surrounding whitespace and normalize Unicode to NFC.
pub fn normalize_segment(raw: &str) -> String {
    raw.trim().nfc().collect()
}

/// Reject names that cannot be a single directory under the taxonomy root.
pub fn validate_segment(segment: &str) -> Result<(), TaxonomyError> {
    let reason = if segment.is_empty() {
        Some("name is empty")
    } else if segment == "." || segment == ".." {
        Some("relative path components are not allowed")
    } else if segment.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if segment.contains('\0') {
        Some("name contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(TaxonomyError::InvalidSegment {
            segment: segment.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
