//! Config loading facade: the only way the CLI obtains settings.

use super::merge::builder_with_defaults;
use super::sources::{global_file, workspace_file};
use super::TaxonConfig;
use crate::error::TaxonomyError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads and validates [`TaxonConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for `workspace_root`: defaults, then the global file,
    /// then `<workspace_root>/.taxon.toml`.
    pub fn load(workspace_root: &Path) -> Result<TaxonConfig, TaxonomyError> {
        let global = global_file::global_config_path();
        Self::load_with_global(workspace_root, global.as_deref())
    }

    /// Same as [`ConfigLoader::load`] with an explicit global file location.
    pub fn load_with_global(
        workspace_root: &Path,
        global_path: Option<&Path>,
    ) -> Result<TaxonConfig, TaxonomyError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_path)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: TaxonConfig = builder.build()?.try_deserialize()?;
        debug!(workspace_root = %workspace_root.display(), "Loaded settings");
        Self::validated(config)
    }

    /// Load settings from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<TaxonConfig, TaxonomyError> {
        let config: TaxonConfig = builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded settings file");
        Self::validated(config)
    }

    fn validated(config: TaxonConfig) -> Result<TaxonConfig, TaxonomyError> {
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            TaxonomyError::Settings(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
