//! Merge rules: built-in defaults applied beneath every file source.

use crate::materialize::DEFAULT_MARKER_FILE;
use crate::taxonomy::store::DEFAULT_TAXONOMY_FILE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("taxonomy_file", DEFAULT_TAXONOMY_FILE)?
        .set_default("marker_file", DEFAULT_MARKER_FILE)
}
