//! Starter taxonomy for `taxon init`.
//!
//! A fresh workspace gets a small music-production taxonomy: genre branches
//! split by technique, plus mixing and mastering topics. Users grow it from
//! there with `add` and `infer`.

use crate::error::TaxonomyError;
use crate::taxonomy::{Node, TaxonomyStore};
use tracing::info;

const POP: &[(&str, &[&str])] = &[
    (
        "Harmony",
        &["ChordProgressions", "ModalInterchange", "BorrowedChords"],
    ),
    ("Rhythm", &["DrumPatterns", "BassGrooves", "Clave_2Step"]),
    ("Texture", &["Guitar", "Synth", "Strings"]),
    ("Arrangement", &["Verse_Section", "Chorus_Section", "Bridge"]),
];

const J_POP: &[&str] = &["Harmony", "Rhythm", "Texture", "Arrangement"];

const MIXING: &[&str] = &["EQ", "Compression", "Reverb", "StereoImaging", "MasterBus"];

const MASTERING: &[&str] = &["Limiting", "Loudness", "ReferenceTracks", "ExportSettings"];

fn sequence(names: &[&str]) -> Node {
    Node::Sequence(names.iter().map(|n| n.to_string()).collect())
}

/// The built-in starter taxonomy.
pub fn default_taxonomy() -> Node {
    let pop = POP
        .iter()
        .map(|(name, techniques)| (name.to_string(), sequence(techniques)))
        .collect();

    Node::Mapping(vec![
        ("Pop".to_string(), Node::Mapping(pop)),
        ("J-Pop".to_string(), sequence(J_POP)),
        ("Mixing".to_string(), sequence(MIXING)),
        ("Mastering".to_string(), sequence(MASTERING)),
    ])
}

/// What `write_default_taxonomy` did with the taxonomy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Write the starter taxonomy unless a taxonomy file already exists.
pub fn write_default_taxonomy(
    store: &TaxonomyStore,
    force: bool,
) -> Result<InitOutcome, TaxonomyError> {
    let existed = store.exists();
    if existed && !force {
        info!(path = %store.path().display(), "Taxonomy exists, leaving it untouched");
        return Ok(InitOutcome::Skipped);
    }
    store.save(&default_taxonomy())?;
    Ok(if existed {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}
