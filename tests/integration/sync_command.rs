//! Integration tests for sync: materializing the taxonomy under the root

use serde_json::json;
use std::fs;
use std::path::Path;
use taxon::error::TaxonomyError;
use taxon::materialize::Materializer;
use taxon::service::TaxonomyService;
use taxon::taxonomy::{insert_path, Node, TaxonomyStore};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::integration::{tree_dirs, write_tree};

fn service_for(root: &Path) -> TaxonomyService {
    TaxonomyService::new(
        root.to_path_buf(),
        TaxonomyStore::new(root.join("taxonomy.json")),
        Materializer::default(),
    )
}

/// Every entry below `root` with its kind and length, for comparing snapshots.
fn snapshot(root: &Path) -> Vec<(String, bool, u64)> {
    let mut entries: Vec<_> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| {
            let meta = e.metadata().unwrap();
            (
                e.path().strip_prefix(root).unwrap().display().to_string(),
                meta.is_dir(),
                meta.len(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_sync_creates_every_directory_with_marker() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        json!({
            "Pop": {"Harmony": ["Chords", "Voicing"], "Rhythm": "Swing"},
            "Mixing": ["EQ"]
        }),
    );

    let report = service_for(root).sync().unwrap();
    assert_eq!(report.directories, 8);
    assert_eq!(report.created_dirs.len(), 8);
    assert_eq!(report.created_markers, 8);

    assert_eq!(
        tree_dirs(root),
        vec![
            "Mixing",
            "Mixing/EQ",
            "Pop",
            "Pop/Harmony",
            "Pop/Harmony/Chords",
            "Pop/Harmony/Voicing",
            "Pop/Rhythm",
            "Pop/Rhythm/Swing",
        ]
    );
    for dir in tree_dirs(root) {
        let marker = root.join(&dir).join(".keep");
        assert!(marker.is_file(), "{} lacks a marker", dir);
        assert_eq!(fs::metadata(&marker).unwrap().len(), 0);
    }
}

#[test]
fn test_sync_twice_leaves_tree_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!({"A": {"B": ["C", "D"]}, "E": []}));
    let service = service_for(root);

    service.sync().unwrap();
    let first = snapshot(root);

    let second_report = service.sync().unwrap();
    assert!(second_report.is_noop());
    assert_eq!(second_report.directories, 5);
    assert_eq!(snapshot(root), first);
}

#[test]
fn test_sync_keeps_existing_files_and_markers() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!({"Pop": ["Rhythm"]}));
    fs::create_dir_all(root.join("Pop")).unwrap();
    fs::write(root.join("Pop").join(".keep"), "kept").unwrap();
    fs::write(root.join("Pop").join("song.wav"), "audio").unwrap();

    let report = service_for(root).sync().unwrap();
    assert_eq!(report.created_dirs.len(), 1);
    assert_eq!(report.created_markers, 1);
    assert_eq!(
        fs::read_to_string(root.join("Pop").join(".keep")).unwrap(),
        "kept"
    );
    assert!(root.join("Pop").join("song.wav").is_file());
}

#[test]
fn test_sync_never_removes_unlisted_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("Stray")).unwrap();
    write_tree(root, json!({"Pop": []}));

    service_for(root).sync().unwrap();
    assert_eq!(tree_dirs(root), vec!["Pop", "Stray"]);
}

#[test]
fn test_inserted_chain_materializes_exactly_three_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let mut tree = Node::default();
    let segments: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    insert_path(&mut tree, &segments).unwrap();
    Materializer::default().materialize(root, &tree).unwrap();

    assert_eq!(tree_dirs(root), vec!["A", "A/B", "A/B/C"]);
}

#[test]
fn test_promotion_materializes_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let mut tree = Node::from_value(json!({"X": ["p", "q"]})).unwrap();
    let segments: Vec<String> = ["X", "p", "r"].iter().map(|s| s.to_string()).collect();
    insert_path(&mut tree, &segments).unwrap();
    Materializer::default().materialize(root, &tree).unwrap();

    assert_eq!(tree_dirs(root), vec!["X", "X/p", "X/p/r", "X/q"]);
}

#[test]
fn test_sync_rejects_number_without_touching_disk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!({"Pop": {"Harmony": ["Chords"], "Tempo": 120}}));

    let err = service_for(root).sync().unwrap_err();
    match err {
        TaxonomyError::UnsupportedNodeType { pointer, found } => {
            assert_eq!(pointer, "/Pop/Tempo");
            assert_eq!(found, "number");
        }
        other => panic!("expected UnsupportedNodeType, got {:?}", other),
    }
    assert!(tree_dirs(root).is_empty(), "nothing may be created");
}

#[test]
fn test_sync_rejects_null_inside_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, json!({"Mixing": ["EQ", null]}));

    let err = service_for(root).sync().unwrap_err();
    assert!(matches!(
        err,
        TaxonomyError::UnsupportedNodeType { ref pointer, ref found }
            if pointer == "/Mixing/1" && found == "null"
    ));
}

#[test]
fn test_sync_without_taxonomy_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = service_for(temp_dir.path()).sync().unwrap_err();
    assert!(matches!(err, TaxonomyError::ConfigNotFound(_)));
}

#[test]
fn test_sync_with_malformed_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("taxonomy.json"), "{\"Pop\": [").unwrap();
    let err = service_for(temp_dir.path()).sync().unwrap_err();
    assert!(matches!(err, TaxonomyError::ConfigParseError { .. }));
}

#[test]
fn test_sync_rejects_unsafe_names() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), json!({"Pop": ["../escape"]}));
    let err = service_for(temp_dir.path()).sync().unwrap_err();
    assert!(matches!(err, TaxonomyError::InvalidSegment { .. }));
    assert!(!temp_dir.path().join("escape").exists());
}
