//! Error types for descriptor construction and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mode resolution errors
    #[error("unrecognized build mode: {0:?} (expected \"development\" or \"production\")")]
    UnknownMode(String),

    // Descriptor construction errors
    #[error("invalid rule pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("project root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("HTML template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("alias {alias:?} points outside the project root: {path}")]
    AliasOutsideRoot { alias: String, path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
