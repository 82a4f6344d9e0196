//! Error types for syphon operations
//!
//! Only assembly conflicts and configuration loading can fail. Everything else
//! (unknown control types, unresolved paths, malformed names) degrades gracefully.

use thiserror::Error;

/// Result type alias for syphon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for syphon operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two controls disagree on the shape of a path, e.g. `foo` and `foo[bar]`.
    #[error(
        "structural conflict at `{path}`: `{name}` expects {expected} but `{existing}` already holds {found} there"
    )]
    StructuralConflict {
        path: String,
        name: String,
        existing: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
