//! Status report: which taxonomy paths exist on disk.
//!
//! Produces the data for `taxon status`. Every path the tree describes is
//! listed in declaration order together with whether its directory and its
//! marker file are present under the root.

use crate::taxonomy::Node;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One managed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStatus {
    pub path: String,
    pub directory: bool,
    pub marker: bool,
}

impl PathStatus {
    pub fn is_complete(&self) -> bool {
        self.directory && self.marker
    }
}

/// Status of the whole taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyStatus {
    pub root: String,
    pub taxonomy_file: String,
    pub total: usize,
    pub missing: usize,
    pub paths: Vec<PathStatus>,
}

/// Compare `tree` against the directories under `root`.
pub fn build_status(
    tree: &Node,
    root: &Path,
    taxonomy_file: &Path,
    marker_file: &str,
) -> TaxonomyStatus {
    let paths: Vec<PathStatus> = tree
        .paths()
        .into_iter()
        .map(|segments| {
            let dir = segments.iter().fold(root.to_path_buf(), |acc, s| acc.join(s));
            PathStatus {
                path: segments.join("/"),
                directory: dir.is_dir(),
                marker: dir.join(marker_file).is_file(),
            }
        })
        .collect();
    let missing = paths.iter().filter(|p| !p.is_complete()).count();

    TaxonomyStatus {
        root: root.display().to_string(),
        taxonomy_file: taxonomy_file.display().to_string(),
        total: paths.len(),
        missing,
        paths,
    }
}

/// Human-readable table with a one-line summary.
pub fn format_status_text(status: &TaxonomyStatus, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Directory", "Marker"]);
    for entry in &status.paths {
        table.add_row(vec![
            entry.path.clone(),
            presence(entry.directory, color),
            presence(entry.marker, color),
        ]);
    }

    let summary = if status.missing == 0 {
        format!("All {} paths are in place.", status.total)
    } else {
        format!(
            "{} of {} paths need `taxon sync`.",
            status.missing, status.total
        )
    };
    format!(
        "Taxonomy: {}\nRoot: {}\n{}\n{}",
        status.taxonomy_file, status.root, table, summary
    )
}

fn presence(present: bool, color: bool) -> String {
    match (present, color) {
        (true, true) => "present".green().to_string(),
        (false, true) => "missing".red().to_string(),
        (true, false) => "present".to_string(),
        (false, false) => "missing".to_string(),
    }
}
