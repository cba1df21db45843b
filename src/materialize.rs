//! Directory materialization
//!
//! Walks a taxonomy tree and makes sure every node exists on disk as a
//! directory holding an empty marker file. The marker tells a managed but
//! empty directory apart from a stray one. Creation is idempotent; a failed
//! walk leaves whatever it already created in place.

use crate::error::TaxonomyError;
use crate::taxonomy::segment::validate_segment;
use crate::taxonomy::Node;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default marker file name.
pub const DEFAULT_MARKER_FILE: &str = ".keep";

/// What a single `ensure_directory` call had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnsureOutcome {
    pub created_dir: bool,
    pub created_marker: bool,
}

/// Totals for one materialization walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Directories visited, one per taxonomy node.
    pub directories: usize,
    /// Directories that did not exist before the walk.
    pub created_dirs: Vec<PathBuf>,
    /// Marker files written during the walk.
    pub created_markers: usize,
}

impl MaterializeReport {
    fn record(&mut self, path: &Path, outcome: EnsureOutcome) {
        self.directories += 1;
        if outcome.created_dir {
            self.created_dirs.push(path.to_path_buf());
        }
        if outcome.created_marker {
            self.created_markers += 1;
        }
    }

    pub fn is_noop(&self) -> bool {
        self.created_dirs.is_empty() && self.created_markers == 0
    }
}

/// Creates taxonomy directories and their marker files.
#[derive(Debug, Clone)]
pub struct Materializer {
    marker_file: String,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_FILE)
    }
}

impl Materializer {
    pub fn new(marker_file: impl Into<String>) -> Self {
        Self {
            marker_file: marker_file.into(),
        }
    }

    pub fn marker_file(&self) -> &str {
        &self.marker_file
    }

    /// Create `path` with all missing ancestors, then its marker if absent.
    pub fn ensure_directory(&self, path: &Path) -> Result<EnsureOutcome, TaxonomyError> {
        let created_dir = !path.is_dir();
        fs::create_dir_all(path).map_err(|e| TaxonomyError::io(path, e))?;

        let marker = path.join(&self.marker_file);
        let created_marker = !marker.exists();
        if created_marker {
            fs::File::create(&marker).map_err(|e| TaxonomyError::io(&marker, e))?;
        }

        if created_dir {
            debug!(path = %path.display(), "Created directory");
        }
        Ok(EnsureOutcome {
            created_dir,
            created_marker,
        })
    }

    /// Ensure every node below `node` exists under `base`.
    pub fn materialize(&self, base: &Path, node: &Node) -> Result<MaterializeReport, TaxonomyError> {
        let mut report = MaterializeReport::default();
        self.walk(base, node, &mut report)?;
        Ok(report)
    }

    fn walk(
        &self,
        base: &Path,
        node: &Node,
        report: &mut MaterializeReport,
    ) -> Result<(), TaxonomyError> {
        match node {
            Node::Mapping(entries) => {
                for (name, child) in entries {
                    let next = self.ensure_child(base, name, report)?;
                    self.walk(&next, child, report)?;
                }
            }
            Node::Sequence(names) => {
                for name in names {
                    self.ensure_child(base, name, report)?;
                }
            }
            Node::Leaf(name) => {
                self.ensure_child(base, name, report)?;
            }
        }
        Ok(())
    }

    fn ensure_child(
        &self,
        base: &Path,
        name: &str,
        report: &mut MaterializeReport,
    ) -> Result<PathBuf, TaxonomyError> {
        validate_segment(name)?;
        let path = base.join(name);
        let outcome = self.ensure_directory(&path)?;
        report.record(&path, outcome);
        Ok(path)
    }
}
