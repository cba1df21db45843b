//! CLI domain: parse, route, help, output, and presentation only.
//! No taxonomy logic; a single route table dispatches to the taxonomy service.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, is_mutation};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_add_summary, format_infer_summary, format_init_preview, format_init_summary,
    format_sync_report,
};
pub use route::RunContext;
