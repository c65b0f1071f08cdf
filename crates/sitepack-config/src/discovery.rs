//! File-based config discovery for CLI use
//!
//! Layers, lowest priority first: the stock configuration for the project
//! root, a `sitepack.toml` or `sitepack.json` file, then `SITEPACK_*`
//! environment variables. Arrays (rules, plugins) and the `entry` table are
//! replaced wholesale by a higher layer that sets them; other tables such as
//! `devServer` are merged key by key.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::Figment;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::config::BuildConfig;
use crate::defaults::build_configuration;
use crate::error::{ConfigError, Result};
use crate::paths::resolve_paths;

pub const TOML_CONFIG_FILE: &str = "sitepack.toml";
pub const JSON_CONFIG_FILE: &str = "sitepack.json";

/// Environment prefix; `__` separates nested keys
/// (`SITEPACK_DEV_SERVER__PORT=8080` sets `devServer.port`).
pub const ENV_PREFIX: &str = "SITEPACK_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use sitepack_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// println!("{}", config.dev_server.url());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. sitepack.toml
    /// 2. sitepack.json
    pub fn find(&self) -> Option<PathBuf> {
        [TOML_CONFIG_FILE, JSON_CONFIG_FILE]
            .into_iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load the layered configuration; without a config file the stock
    /// configuration (plus environment overrides) is returned.
    pub fn load(&self) -> Result<BuildConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                debug!(root = %self.root.display(), "no config file found, using defaults");
                layer(&self.stock(), Figment::new())
            }
        }
    }

    /// Load with an explicit config file instead of the discovered one
    pub fn load_from(&self, path: &Path) -> Result<BuildConfig> {
        if !path.is_file() {
            return Err(ConfigError::NotFound);
        }

        let file = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        debug!(file = %path.display(), "loading config file");
        layer(&self.stock(), file)
    }

    fn stock(&self) -> BuildConfig {
        build_configuration(&resolve_paths(&self.root))
    }
}

/// Put `file` and then the environment over `stock`.
fn layer(stock: &BuildConfig, file: Figment) -> Result<BuildConfig> {
    let overrides = env_overrides()
        .into_iter()
        .fold(file, |figment, (path, value)| {
            figment.merge(Serialized::default(&path, value))
        });

    // An `entry` table from any override layer replaces the stock entries.
    let entries = match overrides.find_value("entry") {
        Ok(_) => Some(
            overrides
                .extract_inner::<IndexMap<String, PathBuf>>("entry")
                .map_err(invalid_value)?,
        ),
        Err(_) => None,
    };

    let mut config: BuildConfig = Figment::from(Serialized::defaults(stock))
        .merge(overrides)
        .extract()
        .map_err(invalid_value)?;

    match entries {
        Some(entries) => config.entry = entries,
        None => {
            // Figment tables are sorted; restore the declared stock order.
            let rank = |name: &String| stock.entry.get_index_of(name).unwrap_or(usize::MAX);
            config.entry.sort_by(|a, _, b, _| rank(a).cmp(&rank(b)));
        }
    }

    Ok(config)
}

fn invalid_value(err: figment::Error) -> ConfigError {
    ConfigError::InvalidValue {
        field: if err.path.is_empty() {
            "config".to_string()
        } else {
            err.path.join(".")
        },
        hint: Some(err.to_string()),
    }
}

/// `SITEPACK_*` variables as camelCase key paths with parsed values.
///
/// Values that read as JSON (numbers, booleans, arrays) keep that type;
/// anything else is a string.
fn env_overrides() -> Vec<(String, Value)> {
    Env::prefixed(ENV_PREFIX)
        .iter()
        .filter_map(|(key, raw)| {
            let path = env_key_to_path(key.as_str());
            if path.is_empty() || path.split('.').any(str::is_empty) {
                return None;
            }
            let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            Some((path, value))
        })
        .collect()
}

/// `DEV_SERVER__PORT` → `devServer.port`
fn env_key_to_path(key: &str) -> String {
    key.to_ascii_lowercase()
        .split("__")
        .map(camel_case)
        .collect::<Vec<_>>()
        .join(".")
}

fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper = false;
    for ch in segment.chars() {
        if ch == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Discover and load config from current directory (convenience function)
pub fn discover() -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
