use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{default_bundle_filename, default_output_path, normalize_output_name};

/// Placeholder replaced by the entry name in [`OutputConfig::filename`].
pub const NAME_PLACEHOLDER: &str = "[name]";

const BRACED_NAME_PLACEHOLDER: &str = "{name}";

/// Where script bundles are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Bundle filename template; `[name]` (or `{name}`) becomes the entry name
    #[serde(default = "default_bundle_filename")]
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_bundle_filename(),
        }
    }
}

impl OutputConfig {
    pub fn has_name_placeholder(&self) -> bool {
        self.filename.contains(NAME_PLACEHOLDER) || self.filename.contains(BRACED_NAME_PLACEHOLDER)
    }

    /// Bundle filename for `entry`, relative to [`OutputConfig::path`].
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::OutputConfig;
    ///
    /// let output = OutputConfig::default();
    /// assert_eq!(output.filename_for("home"), "js/home.bundle.js");
    /// ```
    pub fn filename_for(&self, entry: &str) -> String {
        normalize_output_name(&self.filename)
            .replace(NAME_PLACEHOLDER, entry)
            .replace(BRACED_NAME_PLACEHOLDER, entry)
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Html,
    Stylesheet,
    Script,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputKind::Html => "html",
            OutputKind::Stylesheet => "css",
            OutputKind::Script => "js",
        })
    }
}

/// A file the bundler is expected to write for a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedOutput {
    pub kind: OutputKind,

    /// Path relative to the output directory, `/`-separated
    pub filename: String,

    /// Entry that produces this file (scripts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl PlannedOutput {
    /// Location under `output_dir`; empty `/` segments are skipped.
    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        self.filename
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(output_dir.to_path_buf(), |acc, part| acc.join(part))
    }
}
