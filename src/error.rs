//! Error types for the taxonomy tool.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure a taxonomy command can surface.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Taxonomy file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse taxonomy file {}: {source}", path.display())]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported node type at {pointer}: expected object, array of strings, or string, found {found}")]
    UnsupportedNodeType { pointer: String, found: String },

    #[error("Invalid taxonomy structure: {0}")]
    InvalidTreeStructure(String),

    #[error("Invalid path segment {segment:?}: {reason}")]
    InvalidSegment { segment: String, reason: String },

    #[error("Path has no segments: {0:?}")]
    EmptyPath(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Settings(String),
}

impl TaxonomyError {
    /// Attach the path an I/O failure happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaxonomyError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for TaxonomyError {
    fn from(err: config::ConfigError) -> Self {
        TaxonomyError::Settings(err.to_string())
    }
}
