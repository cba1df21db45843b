//! Taxon: Declarative Directory Taxonomies
//!
//! Keeps a hierarchical taxonomy in `taxonomy.json` and mirrors it onto the
//! filesystem as nested directories, each carrying a `.keep` marker. The tree
//! grows through explicit paths or through style tags inferred from file names.

pub mod cli;
pub mod config;
pub mod error;
pub mod infer;
pub mod init;
pub mod logging;
pub mod materialize;
pub mod service;
pub mod status;
pub mod taxonomy;
