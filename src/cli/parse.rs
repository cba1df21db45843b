//! CLI parse: clap types for taxon. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// taxon CLI - Sync & grow your folder taxonomy
#[derive(Parser)]
#[command(name = "taxon", version)]
#[command(about = "Sync & grow your folder taxonomy")]
pub struct Cli {
    /// Command to run (default: sync)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the taxonomy is materialized under
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Taxonomy file (default: taxonomy.json in the root)
    #[arg(long, global = true)]
    pub taxonomy: Option<PathBuf>,

    /// Settings file path (overrides default settings loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create or complete every directory described by the taxonomy
    Sync,
    /// Add a new branch to the taxonomy and create its directories
    Add {
        /// Slash-separated categories, e.g. "J-Pop/J-Rock" or "Pop/Rhythm/UKGarage"
        path: String,
    },
    /// Infer styles from file names and add them to the taxonomy
    Infer {
        /// Directory to scan (default: the root)
        #[arg(long)]
        scan: Option<PathBuf>,
        /// Report discovered paths without changing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Write a starter taxonomy and create its directories
    Init {
        /// Overwrite an existing taxonomy file
        #[arg(long)]
        force: bool,
        /// List the starter paths without writing anything
        #[arg(long)]
        list: bool,
    },
    /// Show which taxonomy paths exist on disk
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
