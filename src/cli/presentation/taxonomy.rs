//! Sync, add and infer presentation.

use crate::materialize::MaterializeReport;
use crate::service::{AddSummary, InferSummary};
use std::path::Path;

/// Example tags shown when a scan finds nothing.
const TAG_EXAMPLES: &str = "[J-Pop>J-Rock] or style=KawaiiBass";

pub fn format_sync_report(report: &MaterializeReport) -> String {
    if report.is_noop() {
        format!(
            "✓ All {} directories already in place.",
            report.directories
        )
    } else {
        format!(
            "✓ All {} directories in place ({} created, {} marker files added).",
            report.directories,
            report.created_dirs.len(),
            report.created_markers
        )
    }
}

pub fn format_add_summary(summary: &AddSummary, taxonomy_file: &Path) -> String {
    let head = if summary.changed {
        format!("Added {}\nUpdated {}", summary.path, taxonomy_file.display())
    } else {
        format!("{} is already in the taxonomy", summary.path)
    };
    format!("{}\n{}", head, format_sync_report(&summary.sync))
}

pub fn format_infer_summary(summary: &InferSummary, taxonomy_file: &Path) -> String {
    if summary.discovered.is_empty() {
        return format!("No style tags found. Examples: {}", TAG_EXAMPLES);
    }

    let mut output = if summary.dry_run {
        String::from("Would add these paths:\n")
    } else {
        String::from("Adding these paths:\n")
    };
    for path in &summary.discovered {
        output.push_str(&format!("  • {}\n", path));
    }

    if summary.dry_run {
        output.push_str("Dry run: taxonomy left unchanged.");
        return output;
    }
    if summary.added.is_empty() {
        output.push_str("All of them were already in the taxonomy.");
    } else {
        output.push_str(&format!(
            "{} new, updated {}",
            summary.added.len(),
            taxonomy_file.display()
        ));
    }
    if let Some(ref report) = summary.sync {
        output.push('\n');
        output.push_str(&format_sync_report(report));
    }
    output
}
