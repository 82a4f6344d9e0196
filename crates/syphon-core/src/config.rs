//! Configuration files (`syphon.toml`, `syphon.json`).
//!
//! Covers the options that can be expressed as data. Readers, writers and custom
//! splitters stay code-only and are set on [`Options`] directly.

use crate::error::{Error, Result};
use crate::options::Options;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed by [`discover_config`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["syphon.toml", "syphon.json"];

/// Data-only subset of [`Options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyphonConfig {
    /// Allow-list of control names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Deny-list of control names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Selectors of controls to skip
    #[serde(default, alias = "ignoredTypes", skip_serializing_if = "Vec::is_empty")]
    pub ignored_types: Vec<String>,
    /// Delimiter for flat names such as `foo.bar`, used to split and to join
    #[serde(default, alias = "keyDelimiter", skip_serializing_if = "Option::is_none")]
    pub key_delimiter: Option<String>,
}

impl SyphonConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // Detect format based on extension
        let config: SyphonConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.key_delimiter.as_deref() == Some("") {
            return Err(Error::Config("key_delimiter must not be empty".into()));
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`; lists from `other` extend, scalars replace.
    pub fn merge(mut self, other: SyphonConfig) -> Self {
        if let Some(include) = other.include {
            self.include.get_or_insert_with(Vec::new).extend(include);
        }
        self.exclude.extend(other.exclude);
        self.ignored_types.extend(other.ignored_types);
        if other.key_delimiter.is_some() {
            self.key_delimiter = other.key_delimiter;
        }
        self
    }
}

impl From<SyphonConfig> for Options {
    fn from(config: SyphonConfig) -> Self {
        let mut options = Options {
            include: config.include,
            exclude: config.exclude,
            ignored_types: config.ignored_types,
            ..Options::default()
        };
        if let Some(delimiter) = config.key_delimiter {
            options = options.key_delimiter(&delimiter);
        }
        options
    }
}

/// Walk up directory tree to find syphon.toml or syphon.json
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let candidate = current.join(file_name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}
