//! Folds `(KeyPath, value)` pairs into one nested object.
//!
//! The shape at every path (mapping, array or scalar) is fixed by the first
//! control that touches it. A later control that needs a different shape is a
//! [`Error::StructuralConflict`].

use crate::error::{Error, Result};
use crate::key_path::KeyPath;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Incremental builder for the serialize result.
#[derive(Debug, Default)]
pub struct NestedAssembler {
    root: Map<String, Value>,
    /// Which control name first established each path prefix.
    owners: HashMap<Vec<String>, String>,
}

impl NestedAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `value` into the object at `path`, attributing it to control `name`.
    pub fn insert(&mut self, path: &KeyPath, value: Value, name: &str) -> Result<()> {
        let keys = path.keys();
        let Some((last, parents)) = keys.split_last() else {
            return Ok(());
        };

        let mut node = &mut self.root;
        for (depth, key) in parents.iter().enumerate() {
            let prefix = &keys[..=depth];
            let entry = node.entry(key.clone()).or_insert_with(|| {
                self.owners.insert(prefix.to_vec(), name.to_string());
                Value::Object(Map::new())
            });
            node = match entry {
                Value::Object(map) => map,
                other => {
                    return Err(conflict(
                        &self.owners,
                        prefix,
                        name,
                        "an object",
                        shape(other),
                    ));
                }
            };
        }

        if path.is_array() {
            let entry = node.entry(last.clone()).or_insert_with(|| {
                self.owners.insert(keys.to_vec(), name.to_string());
                Value::Array(Vec::new())
            });
            match entry {
                Value::Array(items) => items.push(value),
                other => {
                    let found = shape(other);
                    return Err(conflict(&self.owners, keys, name, "an array", found));
                }
            }
        } else {
            if let Some(existing @ (Value::Object(_) | Value::Array(_))) = node.get(last) {
                let found = shape(existing);
                return Err(conflict(&self.owners, keys, name, "a value", found));
            }
            // last write wins for repeated scalar paths
            self.owners.insert(keys.to_vec(), name.to_string());
            node.insert(last.clone(), value);
        }
        Ok(())
    }

    /// Number of top-level keys assembled so far.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn finish(self) -> Map<String, Value> {
        self.root
    }
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::Array(_) => "an array",
        _ => "a value",
    }
}

fn conflict(
    owners: &HashMap<Vec<String>, String>,
    prefix: &[String],
    name: &str,
    expected: &'static str,
    found: &'static str,
) -> Error {
    let path = KeyPath::from_fragments(prefix.iter().cloned())
        .map(|p| p.to_string())
        .unwrap_or_default();
    Error::StructuralConflict {
        path,
        name: name.to_string(),
        existing: owners.get(prefix).cloned().unwrap_or_default(),
        expected,
        found,
    }
}
