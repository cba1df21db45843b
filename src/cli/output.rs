//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::TaxonomyError;

/// Map domain errors to a string for CLI output, with a hint where one helps.
pub fn map_error(e: &TaxonomyError) -> String {
    match e {
        TaxonomyError::ConfigNotFound(_) => format!(
            "{}\nRun `taxon init` to create a starter taxonomy, or pass --taxonomy <file>.",
            e
        ),
        TaxonomyError::EmptyPath(_) => {
            format!("{}\nExample: taxon add \"Pop/Rhythm/UKGarage\"", e)
        }
        _ => e.to_string(),
    }
}
