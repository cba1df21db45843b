//! Integration tests for add: inserting a path, saving, and syncing

use serde_json::json;
use std::fs;
use std::path::Path;
use taxon::error::TaxonomyError;
use taxon::materialize::Materializer;
use taxon::service::TaxonomyService;
use taxon::taxonomy::TaxonomyStore;
use tempfile::TempDir;

use crate::integration::{read_tree, tree_dirs, write_tree};

fn service_for(root: &Path) -> TaxonomyService {
    TaxonomyService::new(
        root.to_path_buf(),
        TaxonomyStore::new(root.join("taxonomy.json")),
        Materializer::default(),
    )
}

#[test]
fn test_add_into_empty_taxonomy() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = write_tree(root, json!({}));

    let summary = service_for(root).add_path("A/B/C").unwrap();
    assert!(summary.changed);
    assert_eq!(summary.path, "A/B/C");
    assert_eq!(summary.sync.created_dirs.len(), 3);

    assert_eq!(read_tree(&file), json!({"A": {"B": {"C": []}}}));
    assert_eq!(tree_dirs(root), vec!["A", "A/B", "A/B/C"]);
}

#[test]
fn test_add_promotes_sequence_and_keeps_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = write_tree(root, json!({"X": ["p", "q"]}));

    service_for(root).add_path("X/p/r").unwrap();

    let saved = read_tree(&file);
    assert_eq!(saved, json!({"X": {"p": ["r"], "q": []}}));
    assert_eq!(tree_dirs(root), vec!["X", "X/p", "X/p/r", "X/q"]);
}

#[test]
fn test_add_appends_to_existing_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = write_tree(root, json!({"Pop": {"Rhythm": ["Swing"]}}));

    service_for(root).add_path("Pop/Rhythm/UKGarage").unwrap();
    assert_eq!(
        read_tree(&file),
        json!({"Pop": {"Rhythm": ["Swing", "UKGarage"]}})
    );
}

#[test]
fn test_add_existing_path_does_not_rewrite_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = root.join("taxonomy.json");
    // Compact formatting would be replaced by a save
    fs::write(&file, r#"{"Pop":{"Rhythm":["Swing"]}}"#).unwrap();

    let summary = service_for(root).add_path("Pop/Rhythm/Swing").unwrap();
    assert!(!summary.changed);
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"{"Pop":{"Rhythm":["Swing"]}}"#
    );
    assert_eq!(tree_dirs(root), vec!["Pop", "Pop/Rhythm", "Pop/Rhythm/Swing"]);
}

#[test]
fn test_add_normalizes_segments() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = write_tree(root, json!({}));

    let summary = service_for(root).add_path(" /J-Pop//  J-Rock /").unwrap();
    assert_eq!(summary.path, "J-Pop/J-Rock");
    assert_eq!(read_tree(&file), json!({"J-Pop": {"J-Rock": []}}));
}

#[test]
fn test_add_empty_path_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let file = write_tree(root, json!({"Pop": []}));

    let err = service_for(root).add_path(" / ").unwrap_err();
    assert!(matches!(err, TaxonomyError::EmptyPath(_)));
    assert_eq!(read_tree(&file), json!({"Pop": []}));
}

#[test]
fn test_add_rejects_parent_segment() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!({}));

    let err = service_for(root).add_path("Pop/../Escape").unwrap_err();
    assert!(matches!(err, TaxonomyError::InvalidSegment { .. }));
    assert!(tree_dirs(root).is_empty());
}

#[test]
fn test_add_without_taxonomy_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = service_for(temp_dir.path()).add_path("Pop").unwrap_err();
    assert!(matches!(err, TaxonomyError::ConfigNotFound(_)));
    assert!(!temp_dir.path().join("taxonomy.json").exists());
}

#[test]
fn test_add_below_root_leaf_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!("Only"));

    let err = service_for(root).add_path("Only/Child").unwrap_err();
    assert!(matches!(err, TaxonomyError::InvalidTreeStructure(_)));
}
