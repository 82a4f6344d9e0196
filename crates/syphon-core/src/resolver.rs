//! Looks up the value for a control's [`KeyPath`] during deserialize.
//!
//! A lookup that finds nothing yields `None` (the absent-marker), which leaves
//! the control untouched. Array-marked paths resolve to the whole array; picking
//! the matching element is up to the writer.

use crate::key_path::{KeyJoiner, KeyPath};
use indexmap::IndexMap;
use serde_json::Value;

/// Resolves key paths against the data object handed to deserialize.
#[derive(Debug)]
pub enum KeyPathResolver<'a> {
    /// Descend the object one key at a time.
    Walk { data: &'a Value },
    /// Look up joined keys in a flattened view of the object.
    Joined {
        joiner: KeyJoiner,
        flat: IndexMap<String, &'a Value>,
    },
}

impl<'a> KeyPathResolver<'a> {
    /// Segment-walk resolver.
    pub fn walk(data: &'a Value) -> Self {
        KeyPathResolver::Walk { data }
    }

    /// Joined-key resolver. The object is flattened once, up front.
    pub fn joined(data: &'a Value, joiner: KeyJoiner) -> Self {
        let mut flat = IndexMap::new();
        if let Value::Object(map) = data {
            flatten_into(&mut flat, &joiner, None, map);
        }
        KeyPathResolver::Joined { joiner, flat }
    }

    /// Pick the mode from an optional joiner.
    pub fn new(data: &'a Value, joiner: Option<&KeyJoiner>) -> Self {
        match joiner {
            Some(joiner) => Self::joined(data, joiner.clone()),
            None => Self::walk(data),
        }
    }

    pub fn resolve(&self, path: &KeyPath) -> Option<&'a Value> {
        match self {
            KeyPathResolver::Walk { data } => walk(*data, path),
            KeyPathResolver::Joined { joiner, flat } => {
                flat.get(&path.join_with(joiner)).copied()
            }
        }
    }
}

fn walk<'a>(data: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.keys()
        .iter()
        .try_fold(data, |node, key| node.as_object()?.get(key))
}

fn flatten_into<'a>(
    flat: &mut IndexMap<String, &'a Value>,
    joiner: &KeyJoiner,
    parent: Option<&str>,
    map: &'a serde_json::Map<String, Value>,
) {
    for (key, value) in map {
        let joined = match parent {
            Some(parent) => joiner.join(parent, key),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => flatten_into(flat, joiner, Some(joined.as_str()), child),
            leaf => {
                flat.insert(joined, leaf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_path::KeySplitter;
    use serde_json::json;

    fn path(name: &str) -> KeyPath {
        KeyPath::parse(name).unwrap()
    }

    #[test]
    fn test_walk_nested() {
        let data = json!({"widget": "wombat", "foo": {"bar": "baz", "baz": {"qux": "qux"}}});
        let resolver = KeyPathResolver::walk(&data);
        assert_eq!(resolver.resolve(&path("widget")), Some(&json!("wombat")));
        assert_eq!(resolver.resolve(&path("foo[bar]")), Some(&json!("baz")));
        assert_eq!(resolver.resolve(&path("foo[baz][qux]")), Some(&json!("qux")));
    }

    #[test]
    fn test_walk_tolerates_missing_and_non_mapping_nodes() {
        let data = json!({"foo": "scalar"});
        let resolver = KeyPathResolver::walk(&data);
        assert_eq!(resolver.resolve(&path("missing[deep]")), None);
        assert_eq!(resolver.resolve(&path("foo[bar]")), None);
    }

    #[test]
    fn test_walk_distinguishes_null_from_absent() {
        let data = json!({"chk": null});
        let resolver = KeyPathResolver::walk(&data);
        assert_eq!(resolver.resolve(&path("chk")), Some(&Value::Null));
        assert_eq!(resolver.resolve(&path("other")), None);
    }

    #[test]
    fn test_walk_array_marker_returns_whole_array() {
        let data = json!({"foo": {"bar": ["baz", "qux"]}});
        let resolver = KeyPathResolver::walk(&data);
        assert_eq!(
            resolver.resolve(&path("foo[bar][]")),
            Some(&json!(["baz", "qux"]))
        );
    }

    #[test]
    fn test_joined_lookup_against_nested_object() {
        let data = json!({"widget": "wombat", "foo": {"bar": "baz", "baz": {"quux": "qux"}}});
        let resolver = KeyPathResolver::joined(&data, KeyJoiner::delimited("."));

        // Bracket parsing leaves dotted names as a single key
        assert_eq!(resolver.resolve(&path("foo.bar")), Some(&json!("baz")));
        assert_eq!(resolver.resolve(&path("foo.baz.quux")), Some(&json!("qux")));
        assert_eq!(resolver.resolve(&path("widget")), Some(&json!("wombat")));

        // A dot splitter produces several segments that join back to the same key
        let split = KeySplitter::delimited(".").split("foo.baz.quux").unwrap();
        assert_eq!(resolver.resolve(&split), Some(&json!("qux")));
    }

    #[test]
    fn test_joined_lookup_against_flat_object() {
        let data = json!({"foo.bar": "baz"});
        let resolver = KeyPathResolver::joined(&data, KeyJoiner::delimited("."));
        assert_eq!(resolver.resolve(&path("foo.bar")), Some(&json!("baz")));
        assert_eq!(resolver.resolve(&path("foo")), None);
    }

    #[test]
    fn test_joined_lookup_keeps_arrays_as_leaves() {
        let data = json!({"foo": {"bar": ["a", "b"]}});
        let resolver = KeyPathResolver::joined(&data, KeyJoiner::brackets());
        assert_eq!(
            resolver.resolve(&path("foo[bar][]")),
            Some(&json!(["a", "b"]))
        );
    }
}
