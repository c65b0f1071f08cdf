//! Development server configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Local preview server parameters, read once at server start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directory the server serves generated files from
    #[serde(default = "default_content_base")]
    pub content_base: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Gzip responses
    #[serde(default)]
    pub compress: bool,

    /// Terminal output verbosity
    #[serde(default)]
    pub stats: StatsLevel,

    /// Open a browser tab after the first build
    #[serde(default)]
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            content_base: default_content_base(),
            host: default_host(),
            port: default_port(),
            compress: false,
            stats: StatsLevel::default(),
            open: false,
        }
    }
}

impl DevServerConfig {
    /// Address the browser should open.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::DevServerConfig;
    ///
    /// assert_eq!(DevServerConfig::default().url(), "http://localhost:9000/");
    /// ```
    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

/// How much the server prints per build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatsLevel {
    #[default]
    All,
    ErrorsOnly,
    None,
}

impl fmt::Display for StatsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatsLevel::All => "all",
            StatsLevel::ErrorsOnly => "errors-only",
            StatsLevel::None => "none",
        })
    }
}

fn default_content_base() -> PathBuf {
    PathBuf::from("dist")
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    9000
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn port_defaults_to_9000() {
        let config: DevServerConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.stats, StatsLevel::All);
    }

    #[test]
    fn stats_uses_kebab_case() {
        let config: DevServerConfig =
            serde_json::from_value(json!({ "stats": "errors-only", "contentBase": "public" }))
                .unwrap();
        assert_eq!(config.stats, StatsLevel::ErrorsOnly);
        assert_eq!(config.content_base, PathBuf::from("public"));
        assert_eq!(config.stats.to_string(), "errors-only");
    }

    #[test]
    fn round_trip_keeps_every_field() {
        let config = DevServerConfig {
            port: 9000,
            compress: true,
            open: true,
            stats: StatsLevel::None,
            ..DevServerConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: DevServerConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
