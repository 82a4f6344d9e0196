//! Type registry.
//!
//! Maps a control's type tag to a handler, with a default handler that is
//! always present. [`crate::readers::InputReaders`] and
//! [`crate::writers::InputWriters`] are the two instances used per call.

use indexmap::IndexMap;
use std::collections::HashMap;

/// Registry of handlers keyed by control type tag.
#[derive(Clone)]
pub struct TypeRegistry<H> {
    default: H,
    handlers: HashMap<String, H>,
}

impl<H: Clone> TypeRegistry<H> {
    /// Create a registry seeded with its fallback handler.
    pub fn new(default: H) -> Self {
        Self {
            default,
            handlers: HashMap::new(),
        }
    }

    /// Replace the fallback handler used for unregistered tags.
    pub fn register_default(&mut self, handler: H) {
        self.default = handler;
    }

    /// Register a handler for an exact type tag, replacing any existing one.
    pub fn register(&mut self, tag: impl Into<String>, handler: H) {
        self.handlers.insert(tag.into(), handler);
    }

    /// Apply caller overrides on top of whatever is already registered.
    pub fn register_all(&mut self, overrides: &IndexMap<String, H>) {
        for (tag, handler) in overrides {
            self.register(tag.clone(), handler.clone());
        }
    }

    /// Handler for `tag`, or the default if none is registered.
    pub fn dispatch(&self, tag: &str) -> &H {
        self.handlers.get(tag).unwrap_or(&self.default)
    }

    /// Check if a tag has an explicit handler.
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// List explicitly registered tags.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}
