//! The configuration record handed to the bundler.
//!
//! `BuildConfig` is a plain value: it is assembled once (see
//! [`build_configuration`](crate::build_configuration)), optionally layered
//! with file and environment overrides, validated, and then consumed whole.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{
    CssBundle, HtmlPage, ModuleOptions, OutputConfig, OutputKind, OutputPlugin, PlannedOutput,
    TransformRule,
};
use crate::dev::DevServerConfig;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Entry name to script path, one bundle per entry
    #[serde(default)]
    pub entry: IndexMap<String, PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    /// Ordered transform rules
    #[serde(default)]
    pub module: ModuleOptions,

    #[serde(default)]
    pub dev_server: DevServerConfig,

    /// Post-build generation steps, run in declared order
    #[serde(default)]
    pub plugins: Vec<OutputPlugin>,
}

impl BuildConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::BuildConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "entry": { "home": "src/scripts/home.js" },
    ///     "devServer": { "port": 8080 }
    /// });
    ///
    /// let config = BuildConfig::from_value(value).unwrap();
    /// assert_eq!(config.entry["home"], PathBuf::from("src/scripts/home.js"));
    /// assert_eq!(config.dev_server.port, 8080);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(format!("TOML serialization failed: {e}")),
        })
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML: {e}")),
        })
    }

    /// Add or replace an entry point.
    pub fn with_entry(mut self, name: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        self.entry.insert(name.into(), script.into());
        self
    }

    /// Append a rule after the existing ones (lowest dispatch priority).
    pub fn with_rule(mut self, rule: TransformRule) -> Self {
        self.module.rules.push(rule);
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<OutputPlugin>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entry.keys().map(String::as_str)
    }

    /// Rule that governs `path`: the first match in declared order.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::{build_configuration, resolve_paths};
    ///
    /// let config = build_configuration(&resolve_paths("/proj"));
    /// let rule = config.match_rule("src/scripts/home.js").unwrap();
    /// assert_eq!(rule.chain[0].loader, "babel-loader");
    /// ```
    pub fn match_rule(&self, path: impl AsRef<Path>) -> Option<&TransformRule> {
        self.module
            .first_match(path.as_ref())
            .map(|(_, rule)| rule)
    }

    /// Indices of every rule matching `path`; more than one means later
    /// rules are shadowed for this file.
    pub fn overlapping_rules(&self, path: impl AsRef<Path>) -> Vec<usize> {
        self.module.all_matches(path.as_ref())
    }

    pub fn html_pages(&self) -> impl Iterator<Item = &HtmlPage> {
        self.plugins.iter().filter_map(OutputPlugin::as_html)
    }

    pub fn css_bundle(&self) -> Option<&CssBundle> {
        self.plugins.iter().find_map(OutputPlugin::as_css)
    }

    /// Where an asset handled by a file-copying loader lands, relative to
    /// the output directory.
    pub fn asset_output(&self, source: impl AsRef<Path>) -> Option<String> {
        let source = source.as_ref();
        self.match_rule(source)?
            .chain
            .iter()
            .find_map(|step| step.asset_filename(source))
    }

    /// Files a build of this configuration writes: pages, stylesheets, then
    /// one script bundle per entry.
    pub fn planned_outputs(&self) -> Vec<PlannedOutput> {
        let mut outputs = Vec::with_capacity(self.plugins.len() + self.entry.len());

        for plugin in &self.plugins {
            let Some(filename) = plugin.output_filename() else {
                continue;
            };
            let kind = match plugin {
                OutputPlugin::Html(_) => OutputKind::Html,
                OutputPlugin::ExtractCss(_) => OutputKind::Stylesheet,
            };
            outputs.push(PlannedOutput {
                kind,
                filename: filename.to_string(),
                entry: None,
            });
        }

        // Sort to keep html before css regardless of plugin declaration order
        outputs.sort_by_key(|output| output.kind == OutputKind::Stylesheet);

        outputs.extend(self.entry.keys().map(|name| PlannedOutput {
            kind: OutputKind::Script,
            filename: self.output.filename_for(name),
            entry: Some(name.clone()),
        }));

        outputs
    }
}
