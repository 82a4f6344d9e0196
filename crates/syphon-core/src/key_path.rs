//! Key paths parsed from control names.
//!
//! `foo[bar][baz][]` parses to `foo`, `bar`, `baz` followed by the array marker.
//! Custom splitters and joiners let callers use other notations, e.g. `foo.bar`.

use std::fmt;
use std::sync::Arc;

/// One step of a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    /// Trailing `[]`: the value is appended to an array at the parent key.
    ArrayMarker,
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::ArrayMarker => None,
        }
    }
}

/// A non-empty list of key segments, optionally ending in the array marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    keys: Vec<String>,
    array: bool,
}

impl KeyPath {
    /// Build a path from raw fragments.
    ///
    /// Empty fragments are dropped, except that an empty final fragment becomes
    /// the array marker. Returns `None` when no key fragment remains.
    pub fn from_fragments<I, S>(fragments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys = Vec::new();
        let mut array = false;
        for fragment in fragments {
            let fragment = fragment.into();
            array = fragment.is_empty();
            if !array {
                keys.push(fragment);
            }
        }
        if keys.is_empty() {
            return None;
        }
        Some(Self { keys, array })
    }

    /// Parse bracket notation: `foo[bar][]`.
    ///
    /// Runs of non-bracket characters become keys; stray brackets are ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let mut keys = Vec::new();
        let mut current = String::new();

        for c in name.chars() {
            if c == '[' || c == ']' {
                if !current.is_empty() {
                    keys.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            keys.push(current);
        }

        if keys.is_empty() {
            return None;
        }
        Some(Self {
            keys,
            array: name.ends_with("[]"),
        })
    }

    /// Key segments, without the array marker.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The final key segment (the one the value lands on).
    pub fn last_key(&self) -> &str {
        // `keys` is never empty by construction
        self.keys.last().map(String::as_str).unwrap_or_default()
    }

    pub fn is_array(&self) -> bool {
        self.array
    }

    /// All segments, the array marker included.
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments: Vec<PathSegment> =
            self.keys.iter().cloned().map(PathSegment::Key).collect();
        if self.array {
            segments.push(PathSegment::ArrayMarker);
        }
        segments
    }

    /// Fold the key segments left to right with `joiner`.
    pub fn join_with(&self, joiner: &KeyJoiner) -> String {
        let mut keys = self.keys.iter();
        let first = keys.next().cloned().unwrap_or_default();
        keys.fold(first, |parent, child| joiner.join(&parent, child))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.keys.iter();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
        }
        for key in keys {
            write!(f, "[{}]", key)?;
        }
        if self.array {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// Turns a control name into a [`KeyPath`].
#[derive(Clone)]
pub struct KeySplitter(Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>);

impl KeySplitter {
    /// Wrap a custom splitting function.
    ///
    /// The function's fragments go through [`KeyPath::from_fragments`], so an
    /// empty final fragment requests array semantics.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Split on `delimiter`; a trailing `[]` on the last fragment marks an array.
    pub fn delimited(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self::new(move |name| {
            let (body, array) = match name.strip_suffix("[]") {
                Some(body) => (body, true),
                None => (name, false),
            };
            let mut fragments: Vec<String> =
                body.split(delimiter.as_str()).map(str::to_string).collect();
            if array {
                fragments.push(String::new());
            }
            fragments
        })
    }

    pub fn split(&self, name: &str) -> Option<KeyPath> {
        KeyPath::from_fragments((self.0)(name))
    }
}

impl fmt::Debug for KeySplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySplitter(..)")
    }
}

/// Joins a parent key and a child key into one flat lookup key.
#[derive(Clone)]
pub struct KeyJoiner(Arc<dyn Fn(&str, &str) -> String + Send + Sync>);

impl KeyJoiner {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// `parent{delimiter}child`
    pub fn delimited(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self::new(move |parent, child| format!("{}{}{}", parent, delimiter, child))
    }

    /// `parent[child]`
    pub fn brackets() -> Self {
        Self::new(|parent, child| format!("{}[{}]", parent, child))
    }

    pub fn join(&self, parent: &str, child: &str) -> String {
        (self.0)(parent, child)
    }
}

impl fmt::Debug for KeyJoiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyJoiner(..)")
    }
}
