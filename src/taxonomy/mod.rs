//! Taxonomy Tree
//!
//! The desired directory hierarchy as a recursive tagged value. Each node is a
//! mapping of category names to child nodes, a flat sequence of leaf names, or
//! a single leaf name. Every name is one directory segment.

pub mod insert;
pub mod segment;
pub mod store;

use crate::error::TaxonomyError;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

pub use insert::insert_path;
pub use store::TaxonomyStore;

/// A node of the taxonomy tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Named children in declaration order. Keys are unique.
    Mapping(Vec<(String, Node)>),
    /// Leaf names in declaration order.
    Sequence(Vec<String>),
    /// A single leaf name.
    Leaf(String),
}

impl Default for Node {
    fn default() -> Self {
        Node::Mapping(Vec::new())
    }
}

impl Node {
    /// Convert a parsed JSON document into a tree.
    ///
    /// Objects become mappings, arrays of strings become sequences and strings
    /// become leaves. Anything else is rejected with the JSON pointer of the
    /// offending value; nothing is skipped.
    pub fn from_value(value: Value) -> Result<Self, TaxonomyError> {
        convert(value, String::new())
    }

    /// Every managed path below this node, depth-first in declaration order.
    ///
    /// A parent always precedes its descendants.
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        collect_paths(self, &mut Vec::new(), &mut out);
        out
    }
}

fn collect_paths(node: &Node, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    match node {
        Node::Mapping(entries) => {
            for (name, child) in entries {
                prefix.push(name.clone());
                out.push(prefix.clone());
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        Node::Sequence(names) => {
            for name in names {
                let mut path = prefix.clone();
                path.push(name.clone());
                out.push(path);
            }
        }
        Node::Leaf(name) => {
            let mut path = prefix.clone();
            path.push(name.clone());
            out.push(path);
        }
    }
}

fn convert(value: Value, pointer: String) -> Result<Node, TaxonomyError> {
    match value {
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (name, child) in map {
                let child_pointer = format!("{}/{}", pointer, escape_pointer(&name));
                entries.push((name, convert(child, child_pointer)?));
            }
            Ok(Node::Mapping(entries))
        }
        Value::Array(items) => {
            let mut names = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(name) => names.push(name),
                    other => return Err(unsupported(&other, format!("{}/{}", pointer, i))),
                }
            }
            Ok(Node::Sequence(names))
        }
        Value::String(name) => Ok(Node::Leaf(name)),
        other => Err(unsupported(&other, pointer)),
    }
}

fn unsupported(value: &Value, pointer: String) -> TaxonomyError {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    TaxonomyError::UnsupportedNodeType {
        pointer: if pointer.is_empty() {
            "<root>".to_string()
        } else {
            pointer
        },
        found: found.to_string(),
    }
}

// RFC 6901 token escaping.
fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, child) in entries {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
            Node::Sequence(names) => {
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
            Node::Leaf(name) => serializer.serialize_str(name),
        }
    }
}
