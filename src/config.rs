//! Configuration System
//!
//! Tool settings, separate from the taxonomy file itself. Settings are layered
//! with the `config` crate: built-in defaults, the user's global file, then the
//! workspace `.taxon.toml` (or a single explicit file).

use crate::infer::WalkerConfig;
use crate::logging::LoggingConfig;
use crate::taxonomy::segment::validate_segment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonConfig {
    /// Taxonomy file, relative to the taxonomy root unless absolute
    #[serde(default = "default_taxonomy_file")]
    pub taxonomy_file: PathBuf,

    /// Name of the empty marker file placed in every managed directory
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    /// Inference scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_taxonomy_file() -> PathBuf {
    PathBuf::from(crate::taxonomy::store::DEFAULT_TAXONOMY_FILE)
}

fn default_marker_file() -> String {
    crate::materialize::DEFAULT_MARKER_FILE.to_string()
}

impl Default for TaxonConfig {
    fn default() -> Self {
        Self {
            taxonomy_file: default_taxonomy_file(),
            marker_file: default_marker_file(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Settings for `infer` scans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Names skipped during the scan, with everything below them
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_ignore() -> Vec<String> {
    WalkerConfig::default().ignore_names
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_names: self.ignore.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    TaxonomyFile(String),
    MarkerFile(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TaxonomyFile(msg) => write!(f, "taxonomy_file: {}", msg),
            ValidationError::MarkerFile(msg) => write!(f, "marker_file: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TaxonConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.taxonomy_file.as_os_str().is_empty() {
            errors.push(ValidationError::TaxonomyFile(
                "Taxonomy file cannot be empty".to_string(),
            ));
        }

        if let Err(e) = validate_segment(&self.marker_file) {
            errors.push(ValidationError::MarkerFile(e.to_string()));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
