//! CLI presentation: text formatters per command family.

mod init;
mod taxonomy;

pub use init::{format_init_preview, format_init_summary};
pub use taxonomy::{format_add_summary, format_infer_summary, format_sync_report};
