//! CLI command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string for log records (e.g. "sync", "infer").
/// No subcommand runs a sync.
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None | Some(Commands::Sync) => "sync",
        Some(Commands::Add { .. }) => "add",
        Some(Commands::Infer { .. }) => "infer",
        Some(Commands::Init { .. }) => "init",
        Some(Commands::Status { .. }) => "status",
    }
}

/// Whether the command may rewrite the taxonomy file.
pub fn is_mutation(command: Option<&Commands>) -> bool {
    match command {
        Some(Commands::Add { .. }) => true,
        Some(Commands::Infer { dry_run, .. }) => !*dry_run,
        Some(Commands::Init { list, .. }) => !*list,
        None | Some(Commands::Sync) | Some(Commands::Status { .. }) => false,
    }
}
