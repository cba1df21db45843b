//! Taxonomy command service: one entry point per command.
//!
//! Every operation loads the tree fresh from the store, mutates it in memory,
//! saves it when it changed, and re-materializes the whole tree under the
//! root. The CLI only parses, calls one method, and formats the result.

use crate::config::TaxonConfig;
use crate::error::TaxonomyError;
use crate::infer::{self, WalkerConfig};
use crate::init::{self, InitOutcome};
use crate::materialize::{MaterializeReport, Materializer};
use crate::status::{self, TaxonomyStatus};
use crate::taxonomy::segment::split_path;
use crate::taxonomy::{insert_path, TaxonomyStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of `add`.
#[derive(Debug, Clone)]
pub struct AddSummary {
    /// Normalized, slash-joined path
    pub path: String,
    /// Whether the tree changed (and was saved)
    pub changed: bool,
    pub sync: MaterializeReport,
}

/// Result of `infer`.
#[derive(Debug, Clone, Default)]
pub struct InferSummary {
    /// Every candidate path found, sorted
    pub discovered: Vec<String>,
    /// Candidates that were not in the tree yet
    pub added: Vec<String>,
    /// Set when the tree was re-materialized
    pub sync: Option<MaterializeReport>,
    pub dry_run: bool,
}

/// Result of `init`.
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub outcome: InitOutcome,
    pub sync: MaterializeReport,
}

/// Owns the taxonomy store, the materializer, and the root directory.
#[derive(Debug, Clone)]
pub struct TaxonomyService {
    root: PathBuf,
    store: TaxonomyStore,
    materializer: Materializer,
    scan: WalkerConfig,
}

impl TaxonomyService {
    pub fn new(root: PathBuf, store: TaxonomyStore, materializer: Materializer) -> Self {
        Self {
            root,
            store,
            materializer,
            scan: WalkerConfig::default(),
        }
    }

    /// Build from settings. A relative taxonomy file is resolved against `root`;
    /// `taxonomy_override` replaces the configured file.
    pub fn from_config(
        root: PathBuf,
        config: &TaxonConfig,
        taxonomy_override: Option<PathBuf>,
    ) -> Self {
        let file = taxonomy_override.unwrap_or_else(|| config.taxonomy_file.clone());
        let path = if file.is_absolute() {
            file
        } else {
            root.join(file)
        };
        Self {
            store: TaxonomyStore::new(path),
            materializer: Materializer::new(config.marker_file.clone()),
            scan: config.scan.walker_config(),
            root,
        }
    }

    pub fn with_scan_config(mut self, scan: WalkerConfig) -> Self {
        self.scan = scan;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &TaxonomyStore {
        &self.store
    }

    /// Load the tree and materialize it under the root.
    pub fn sync(&self) -> Result<MaterializeReport, TaxonomyError> {
        let tree = self.store.load()?;
        let report = self.materializer.materialize(&self.root, &tree)?;
        info!(
            root = %self.root.display(),
            directories = report.directories,
            created = report.created_dirs.len(),
            "Sync complete"
        );
        Ok(report)
    }

    /// Insert a slash-separated path, save, and sync.
    pub fn add_path(&self, path: &str) -> Result<AddSummary, TaxonomyError> {
        let segments = split_path(path)?;
        if segments.is_empty() {
            return Err(TaxonomyError::EmptyPath(path.to_string()));
        }

        let mut tree = self.store.load()?;
        let changed = insert_path(&mut tree, &segments)?;
        if changed {
            self.store.save(&tree)?;
        } else {
            debug!(path, "Path already present");
        }
        let sync = self.sync()?;

        Ok(AddSummary {
            path: segments.join("/"),
            changed,
            sync,
        })
    }

    /// Grow the tree from style tags in the file names below `scan_dir`.
    ///
    /// Nothing is loaded or written when no tag is found or on a dry run.
    pub fn scan_and_update(
        &self,
        scan_dir: &Path,
        dry_run: bool,
    ) -> Result<InferSummary, TaxonomyError> {
        let discovered: Vec<String> = infer::discover_paths(scan_dir.to_path_buf(), self.scan.clone())?
            .into_iter()
            .collect();
        info!(scan_dir = %scan_dir.display(), found = discovered.len(), "Scan complete");

        if discovered.is_empty() || dry_run {
            return Ok(InferSummary {
                discovered,
                dry_run,
                ..InferSummary::default()
            });
        }

        let mut tree = self.store.load()?;
        let mut added = Vec::new();
        for candidate in &discovered {
            let segments = split_path(candidate)?;
            if insert_path(&mut tree, &segments)? {
                added.push(candidate.clone());
            }
        }
        if !added.is_empty() {
            self.store.save(&tree)?;
        }
        let sync = self.sync()?;

        Ok(InferSummary {
            discovered,
            added,
            sync: Some(sync),
            dry_run,
        })
    }

    /// Write the starter taxonomy (unless present, or when forced) and sync.
    pub fn init(&self, force: bool) -> Result<InitSummary, TaxonomyError> {
        let outcome = init::write_default_taxonomy(&self.store, force)?;
        let sync = self.sync()?;
        Ok(InitSummary { outcome, sync })
    }

    /// Compare the tree with what exists under the root.
    pub fn status(&self) -> Result<TaxonomyStatus, TaxonomyError> {
        let tree = self.store.load()?;
        Ok(status::build_status(
            &tree,
            &self.root,
            self.store.path(),
            self.materializer.marker_file(),
        ))
    }
}
