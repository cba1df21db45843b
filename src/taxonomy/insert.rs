//! Path insertion with sequence promotion.
//!
//! A sequence only holds leaf names. When a path needs to descend below one of
//! those names, the sequence is rebuilt as a mapping whose keys are the former
//! names (each holding an empty sequence) and insertion continues there.

use super::Node;
use crate::error::TaxonomyError;
use tracing::debug;

/// Ensure every segment of `segments` exists as a nested node of `tree`.
///
/// Missing intermediate segments are created as mappings; a missing final
/// segment becomes an empty sequence under a mapping, or a new element of a
/// sequence. Returns whether the tree changed.
pub fn insert_path(tree: &mut Node, segments: &[String]) -> Result<bool, TaxonomyError> {
    if segments.is_empty() {
        return Err(TaxonomyError::EmptyPath(String::new()));
    }
    if let Node::Leaf(name) = tree {
        return Err(TaxonomyError::InvalidTreeStructure(format!(
            "the root is the single category {:?} and cannot hold {:?}",
            name,
            segments.join("/")
        )));
    }
    insert_into(tree, segments)
}

fn insert_into(node: &mut Node, segments: &[String]) -> Result<bool, TaxonomyError> {
    let Some((head, tail)) = segments.split_first() else {
        return Ok(false);
    };

    let replacement = match node {
        Node::Leaf(name) if tail.is_empty() && name.as_str() == head.as_str() => return Ok(false),
        Node::Leaf(name) => Some(Node::Sequence(vec![name.clone()])),
        Node::Sequence(names) if !tail.is_empty() => Some(promote(names)),
        Node::Sequence(_) | Node::Mapping(_) => None,
    };
    if let Some(replacement) = replacement {
        debug!(segment = %head, "promoting node to hold deeper categories");
        *node = replacement;
        insert_into(node, segments)?;
        return Ok(true);
    }

    match node {
        Node::Sequence(names) => {
            if names.iter().any(|n| n == head) {
                Ok(false)
            } else {
                names.push(head.clone());
                Ok(true)
            }
        }
        Node::Mapping(entries) => {
            let (index, created) = match entries.iter().position(|(k, _)| k == head) {
                Some(index) => (index, false),
                None => {
                    let fresh = if tail.is_empty() {
                        Node::Sequence(Vec::new())
                    } else {
                        Node::Mapping(Vec::new())
                    };
                    entries.push((head.clone(), fresh));
                    (entries.len() - 1, true)
                }
            };
            let changed = insert_into(&mut entries[index].1, tail)?;
            Ok(created || changed)
        }
        Node::Leaf(_) => Err(TaxonomyError::InvalidTreeStructure(format!(
            "cannot insert {:?} below a single category",
            segments.join("/")
        ))),
    }
}

/// Rebuild a sequence as a mapping of its names to empty sequences.
/// Repeated names collapse onto the first occurrence.
fn promote(names: &[String]) -> Node {
    let mut entries: Vec<(String, Node)> = Vec::with_capacity(names.len());
    for name in names {
        if !entries.iter().any(|(k, _)| k == name) {
            entries.push((name.clone(), Node::Sequence(Vec::new())));
        }
    }
    Node::Mapping(entries)
}
