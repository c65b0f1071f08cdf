//! Command implementations for the sitepack CLI.
//!
//! - [`show`] - Print the resolved configuration
//! - [`check`] - Configuration validation
//! - [`matches`] - Rule dispatch for a single file
//! - [`outputs`] - Files a build writes
//! - [`schema`] - JSON Schema of the configuration record
//!
//! Every command except `schema` runs against a [`Context`]: the absolute
//! project root plus the layered configuration loaded for it.

pub mod check;
pub mod matches;
pub mod outputs;
pub mod schema;
pub mod show;

use std::path::{Path, PathBuf};

use sitepack_config::{BuildConfig, ConfigDiscovery, ProjectPaths};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, Result};

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use matches::execute as match_execute;
pub use outputs::execute as outputs_execute;
pub use schema::execute as schema_execute;
pub use show::execute as show_execute;

/// Resolved project root and configuration shared by the commands.
#[derive(Debug)]
pub struct Context {
    pub root: PathBuf,
    pub config: BuildConfig,
}

impl Context {
    /// Resolve `--root` against the working directory and load the
    /// configuration, from `--config` when given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = match &cli.root {
            Some(root) => ProjectPaths::resolve_from(root, &cwd).root().to_path_buf(),
            None => cwd.clone(),
        };

        if !root.is_dir() {
            return Err(CliError::FileNotFound(root));
        }

        let discovery = ConfigDiscovery::new(&root);
        let config = match &cli.config {
            Some(file) => {
                let file = cwd.join(file);
                if !file.is_file() {
                    return Err(CliError::FileNotFound(file));
                }
                discovery.load_from(&file)?
            }
            None => discovery.load()?,
        };

        debug!(root = %root.display(), entries = config.entry.len(), "configuration loaded");
        Ok(Self { root, config })
    }

    /// Build a context from an already loaded configuration.
    pub fn new(root: impl AsRef<Path>, config: BuildConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Output directory, anchored at the project root when relative.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_root_is_cleaned() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("site")).unwrap();
        fs::create_dir_all(temp.path().join("other")).unwrap();
        let detour = temp.path().join("other").join("..").join("site");

        let args: Vec<OsString> = vec![
            "sitepack".into(),
            "-C".into(),
            detour.into_os_string(),
            "show".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let ctx = Context::from_cli(&cli).unwrap();

        assert_eq!(ctx.root, temp.path().join("site"));
        assert_eq!(ctx.output_dir(), temp.path().join("site").join("dist"));
    }

    #[test]
    fn test_relative_output_dir_is_anchored_at_root() {
        let mut config = BuildConfig::default();
        config.output.path = PathBuf::from("public");
        let ctx = Context::new("/site", config);
        assert_eq!(ctx.output_dir(), Path::new("/site").join("public"));
    }
}
