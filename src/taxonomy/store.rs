//! Taxonomy file persistence.
//!
//! The whole tree lives in one JSON document. It is read strictly on every
//! invocation and rewritten in full (two-space indent, non-ASCII kept literal)
//! after a mutation.

use super::Node;
use crate::error::TaxonomyError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default taxonomy file name, resolved against the taxonomy root.
pub const DEFAULT_TAXONOMY_FILE: &str = "taxonomy.json";

/// Reads and writes the taxonomy tree at a fixed path.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    path: PathBuf,
}

impl TaxonomyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the persisted tree.
    pub fn load(&self) -> Result<Node, TaxonomyError> {
        if !self.path.exists() {
            return Err(TaxonomyError::ConfigNotFound(self.path.clone()));
        }
        let contents =
            fs::read_to_string(&self.path).map_err(|e| TaxonomyError::io(&self.path, e))?;
        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| TaxonomyError::ConfigParseError {
                path: self.path.clone(),
                source: e,
            })?;
        let node = Node::from_value(value)?;
        debug!(path = %self.path.display(), "Loaded taxonomy");
        Ok(node)
    }

    /// Overwrite the persisted tree with `tree`.
    pub fn save(&self, tree: &Node) -> Result<(), TaxonomyError> {
        let mut contents = serde_json::to_string_pretty(tree)
            .map_err(|e| TaxonomyError::io(&self.path, std::io::Error::other(e)))?;
        contents.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| TaxonomyError::io(parent, e))?;
            }
        }
        fs::write(&self.path, contents).map_err(|e| TaxonomyError::io(&self.path, e))?;
        info!(path = %self.path.display(), "Saved taxonomy");
        Ok(())
    }
}
