use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_css_filename, default_true};

/// Stylesheet extraction into a standalone CSS bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CssBundle {
    /// Output filename relative to the output directory
    #[serde(default = "default_css_filename")]
    pub filename: String,

    /// When set, styles fall back to the extraction rule's `fallback` loader
    #[serde(default)]
    pub disable: bool,

    /// Merge styles from every chunk, not only directly imported ones
    #[serde(default = "default_true")]
    pub all_chunks: bool,
}

impl Default for CssBundle {
    fn default() -> Self {
        Self {
            filename: default_css_filename(),
            disable: false,
            all_chunks: true,
        }
    }
}

impl CssBundle {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }
}
