//! Name inference
//!
//! Grows the taxonomy from style tags embedded in file names. The scan only
//! reads names; file contents are never opened.

pub mod patterns;
pub mod walker;

use crate::error::TaxonomyError;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

pub use patterns::extract_candidate_paths;
pub use walker::{Walker, WalkerConfig};

/// Unique candidate paths from every file name below `scan_dir`, sorted.
pub fn discover_paths(
    scan_dir: PathBuf,
    config: WalkerConfig,
) -> Result<BTreeSet<String>, TaxonomyError> {
    let mut discovered = BTreeSet::new();
    for file in Walker::with_config(scan_dir, config).files()? {
        let Some(name) = file.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        for path in extract_candidate_paths(&name) {
            debug!(file = %file.display(), candidate = %path, "Found style tag");
            discovered.insert(path);
        }
    }
    Ok(discovered)
}
