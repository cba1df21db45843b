//! CLI route: single route table and run context. Dispatches to the taxonomy
//! service and presentation.

use crate::config::{ConfigLoader, TaxonConfig};
use crate::error::TaxonomyError;
use crate::init::default_taxonomy;
use crate::service::TaxonomyService;
use crate::status::format_status_text;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, info_span};

use crate::cli::help::{command_name, is_mutation};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_add_summary, format_infer_summary, format_init_preview, format_init_summary,
    format_sync_report,
};

/// Runtime context for CLI execution: root, settings, and the taxonomy service.
pub struct RunContext {
    service: TaxonomyService,
    config: TaxonConfig,
    color: bool,
}

impl RunContext {
    /// Create the run context from the root and optional settings/taxonomy paths.
    pub fn new(
        root: PathBuf,
        config_path: Option<PathBuf>,
        taxonomy_path: Option<PathBuf>,
    ) -> Result<Self, TaxonomyError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&root)?
        };
        Ok(Self::from_config(root, config, taxonomy_path))
    }

    /// Create the run context from already-loaded settings.
    pub fn from_config(
        root: PathBuf,
        config: TaxonConfig,
        taxonomy_path: Option<PathBuf>,
    ) -> Self {
        let service = TaxonomyService::from_config(root, &config, taxonomy_path);
        Self {
            service,
            config,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn service(&self) -> &TaxonomyService {
        &self.service
    }

    pub fn config(&self) -> &TaxonConfig {
        &self.config
    }

    /// Force colored status output on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute a CLI command via the single route table. No command means sync.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, TaxonomyError> {
        let name = command_name(command);
        let span = info_span!("command", command = name, mutation = is_mutation(command));
        let _entered = span.enter();

        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: Option<&Commands>) -> Result<String, TaxonomyError> {
        let taxonomy_file = self.service.store().path();
        match command {
            None | Some(Commands::Sync) => {
                let report = self.service.sync()?;
                Ok(format_sync_report(&report))
            }
            Some(Commands::Add { path }) => {
                let summary = self.service.add_path(path)?;
                Ok(format_add_summary(&summary, taxonomy_file))
            }
            Some(Commands::Infer { scan, dry_run }) => {
                let scan_dir = scan
                    .clone()
                    .unwrap_or_else(|| self.service.root().to_path_buf());
                let summary = self.service.scan_and_update(&scan_dir, *dry_run)?;
                Ok(format_infer_summary(&summary, taxonomy_file))
            }
            Some(Commands::Init { force, list }) => {
                if *list {
                    return Ok(format_init_preview(&default_taxonomy(), taxonomy_file));
                }
                let summary = self.service.init(*force)?;
                Ok(format_init_summary(&summary, taxonomy_file))
            }
            Some(Commands::Status { format }) => {
                let status = self.service.status()?;
                match format.as_str() {
                    "json" => serde_json::to_string_pretty(&status)
                        .map_err(|e| TaxonomyError::Settings(e.to_string())),
                    "text" => Ok(format_status_text(&status, self.color)),
                    other => Err(TaxonomyError::Settings(format!(
                        "Invalid output format: {} (must be 'text' or 'json')",
                        other
                    ))),
                }
            }
        }
    }
}
