//! Error handling for the rigup CLI.

use std::path::PathBuf;

use miette::Report;
use rigup_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Descriptor construction or validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CLI error into a miette diagnostic for terminal reporting.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        }) => miette::miette!(help = hint, "Configuration error: {message}"),
        CliError::Config(e) => miette::miette!("Configuration error: {e}"),
        _ => miette::miette!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::UnknownMode("staging".to_string()).into();
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("staging"));
    }

    #[test]
    fn validation_hint_becomes_help() {
        let err: CliError = ConfigError::SchemaValidation {
            message: "dev server port cannot be 0".to_string(),
            hint: Some("Pick a fixed port (default 8888)".to_string()),
        }
        .into();
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("port"));
    }
}
