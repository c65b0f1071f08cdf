use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Loader name of the style-extraction step produced by [`TransformStep::extract`].
pub const EXTRACT_LOADER: &str = "extract-text";

/// Loader that copies matched files into the output directory.
pub const FILE_LOADER: &str = "file-loader";

/// Regular expression tested against a file path.
///
/// Paths are matched in their `/`-separated form on every platform, so
/// `node_modules` exclusions behave the same on Windows.
#[derive(Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self)
            .map_err(|err| ConfigError::InvalidValue {
                field: "pattern".to_string(),
                hint: Some(format!("`{source}` is not a valid regular expression: {err}")),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.0.is_match(&slash_path(path))
    }
}

fn slash_path(path: &Path) -> Cow<'_, str> {
    let lossy = path.to_string_lossy();
    if lossy.contains('\\') {
        Cow::Owned(lossy.replace('\\', "/"))
    } else {
        lossy
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FilePattern {}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilePattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source).map(Self).map_err(de::Error::custom)
    }
}

impl JsonSchema for FilePattern {
    fn schema_name() -> Cow<'static, str> {
        "FilePattern".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "regex",
            "description": "Regular expression tested against the `/`-separated file path"
        })
    }
}

/// One loader invocation inside a rule's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransformStep {
    /// Loader name as known to the bundler (e.g. `babel-loader`)
    pub loader: String,

    /// Loader options forwarded verbatim
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl TransformStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Style extraction: run `uses` and pull the result into a standalone
    /// stylesheet, falling back to `fallback` when extraction is disabled.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::TransformStep;
    ///
    /// let step = TransformStep::extract("style-loader", &["css-loader", "sass-loader"]);
    /// assert_eq!(step.options["fallback"], "style-loader");
    /// ```
    pub fn extract(fallback: &str, uses: &[&str]) -> Self {
        Self::new(EXTRACT_LOADER)
            .with_option("fallback", fallback)
            .with_option(
                "use",
                uses.iter().map(|u| Value::from(*u)).collect::<Vec<_>>(),
            )
    }

    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Where a file-copying loader places `source`, relative to the output directory.
    ///
    /// Returns `None` for loaders that do not emit files. Supports the
    /// `[name]` and `[ext]` placeholders of the `name` option.
    pub fn asset_filename(&self, source: &Path) -> Option<String> {
        if self.loader != FILE_LOADER {
            return None;
        }

        let stem = source.file_stem()?.to_string_lossy();
        let ext = source
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default();
        let template = self.option_str("name").unwrap_or("[name].[ext]");
        let file = template.replace("[name]", &stem).replace("[ext]", &ext);

        let prefix = self.option_str("outputPath").unwrap_or("");
        if prefix.is_empty() {
            Some(file)
        } else if prefix.ends_with('/') {
            Some(format!("{prefix}{file}"))
        } else {
            Some(format!("{prefix}/{file}"))
        }
    }
}

/// File pattern mapped to an ordered loader chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransformRule {
    pub test: FilePattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    /// Loaders in declared order; the bundler applies them last-first
    #[serde(rename = "use")]
    pub chain: Vec<TransformStep>,
}

impl TransformRule {
    pub fn new(test: FilePattern) -> Self {
        Self {
            test,
            exclude: None,
            chain: Vec::new(),
        }
    }

    pub fn exclude(mut self, pattern: FilePattern) -> Self {
        self.exclude = Some(pattern);
        self
    }

    pub fn step(mut self, step: TransformStep) -> Self {
        self.chain.push(step);
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }

    /// Steps in the order the bundler runs them (last declared first).
    pub fn application_order(&self) -> impl Iterator<Item = &TransformStep> {
        self.chain.iter().rev()
    }
}

/// Module processing section: the ordered rule list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<TransformRule>,
}

impl ModuleOptions {
    /// First rule matching `path`; later matches are ignored.
    pub fn first_match(&self, path: &Path) -> Option<(usize, &TransformRule)> {
        let found = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(path));
        debug!(
            path = %path.display(),
            rule = found.map(|(index, _)| index),
            "dispatched file to rule"
        );
        found
    }

    /// Indices of every rule matching `path`, in declared order.
    pub fn all_matches(&self, path: &Path) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(path))
            .map(|(index, _)| index)
            .collect()
    }
}
