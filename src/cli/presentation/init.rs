//! Init command presentation: preview and summary formatters.

use crate::init::InitOutcome;
use crate::service::InitSummary;
use crate::taxonomy::Node;
use std::path::Path;

use super::taxonomy::format_sync_report;

pub fn format_init_preview(seed: &Node, taxonomy_file: &Path) -> String {
    let mut output = format!("Starter taxonomy for {}:\n\n", taxonomy_file.display());
    for path in seed.paths() {
        output.push_str(&format!("  - {}\n", path.join("/")));
    }
    output.push_str("\nRun 'taxon init' to write it.");
    output
}

pub fn format_init_summary(summary: &InitSummary, taxonomy_file: &Path) -> String {
    let head = match summary.outcome {
        InitOutcome::Created => format!("✓ Created {}", taxonomy_file.display()),
        InitOutcome::Overwritten => format!("✓ {} (overwritten)", taxonomy_file.display()),
        InitOutcome::Skipped => format!(
            "⊘ {} (already exists, skipped; use --force to overwrite)",
            taxonomy_file.display()
        ),
    };
    format!("{}\n{}", head, format_sync_report(&summary.sync))
}
