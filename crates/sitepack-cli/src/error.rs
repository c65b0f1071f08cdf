//! Error handling for the sitepack CLI.
//!
//! Library errors (`sitepack_config::ConfigError`) convert into [`CliError`]
//! via `#[from]`; `main` renders the final error through miette.

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;
pub use sitepack_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Project root or config file given on the command line is missing
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NoEntries.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert_eq!(
            cli_err.to_string(),
            "Configuration error: no entries specified"
        );
    }

    #[test]
    fn test_file_not_found_shows_path() {
        let err = CliError::FileNotFound(PathBuf::from("/site/sitepack.toml"));
        assert_eq!(err.to_string(), "File not found: /site/sitepack.toml");
    }
}
