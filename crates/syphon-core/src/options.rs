//! Per-call options for serialize and deserialize.

use crate::control::Control;
use crate::key_path::{KeyJoiner, KeyPath, KeySplitter};
use crate::readers::{ReadFn, reader};
use crate::writers::{WriteFn, writer};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Options recognised by [`crate::serialize`] and [`crate::deserialize`].
///
/// Everything is optional; the default processes every named, non-button control
/// with the built-in readers and writers and bracket-notation names.
#[derive(Clone, Default)]
pub struct Options {
    /// Allow-list of control names.
    pub include: Option<Vec<String>>,
    /// Deny-list of control names. Loses to `include` when a name is in both.
    pub exclude: Vec<String>,
    /// Host selectors; matching controls are skipped in both directions.
    pub ignored_types: Vec<String>,
    pub input_readers: IndexMap<String, ReadFn>,
    pub input_writers: IndexMap<String, WriteFn>,
    pub key_splitter: Option<KeySplitter>,
    pub key_joiner: Option<KeyJoiner>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignore(mut self, selector: impl Into<String>) -> Self {
        self.ignored_types.push(selector.into());
        self
    }

    /// Override the reader for one control type.
    pub fn reader<F>(mut self, tag: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn Control) -> Option<Value> + Send + Sync + 'static,
    {
        self.input_readers.insert(tag.into(), reader(f));
        self
    }

    /// Override the writer for one control type.
    pub fn writer<F>(mut self, tag: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut dyn Control, Option<&Value>) + Send + Sync + 'static,
    {
        self.input_writers.insert(tag.into(), writer(f));
        self
    }

    pub fn key_splitter(mut self, splitter: KeySplitter) -> Self {
        self.key_splitter = Some(splitter);
        self
    }

    pub fn key_joiner(mut self, joiner: KeyJoiner) -> Self {
        self.key_joiner = Some(joiner);
        self
    }

    /// Use `delimiter` for both splitting names and joining lookup keys.
    pub fn key_delimiter(self, delimiter: &str) -> Self {
        self.key_splitter(KeySplitter::delimited(delimiter))
            .key_joiner(KeyJoiner::delimited(delimiter))
    }

    /// Parse a control name with the configured splitter, or bracket notation.
    pub fn parse_key(&self, name: &str) -> Option<KeyPath> {
        match &self.key_splitter {
            Some(splitter) => splitter.split(name),
            None => KeyPath::parse(name),
        }
    }

    /// Whether the name filters let `name` through.
    ///
    /// A name in `include` always passes, even when it is also excluded.
    pub fn admits_name(&self, name: &str) -> bool {
        if let Some(include) = &self.include {
            return include.iter().any(|n| n == name);
        }
        !self.exclude.iter().any(|n| n == name)
    }

    /// Whether `control` matches any of the ignored selectors.
    pub fn is_ignored(&self, control: &dyn Control) -> bool {
        self.ignored_types
            .iter()
            .any(|selector| control.matches(selector))
    }

    /// The control's name if the control takes part in this call.
    ///
    /// Skips unnamed controls, button-like controls, ignored selectors and
    /// names rejected by `include`/`exclude`.
    pub fn eligible_name<'c>(&self, control: &'c dyn Control) -> Option<&'c str> {
        let name = control.name().filter(|name| !name.is_empty())?;
        if control.is_button_like() || self.is_ignored(control) || !self.admits_name(name) {
            return None;
        }
        Some(name)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("ignored_types", &self.ignored_types)
            .field("input_readers", &self.input_readers.keys().collect::<Vec<_>>())
            .field("input_writers", &self.input_writers.keys().collect::<Vec<_>>())
            .field("key_splitter", &self.key_splitter)
            .field("key_joiner", &self.key_joiner)
            .finish()
    }
}
