//! File sources for layered settings, lowest precedence first.

pub mod global_file;
pub mod workspace_file;
