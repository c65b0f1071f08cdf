//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::normalize_output_name;
use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a build configuration
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sitepack_config::{BuildConfig, ConfigValidator, HtmlPage, SchemaValidator};
///
/// let config = BuildConfig::default()
///     .with_entry("home", "src/scripts/home.js")
///     .with_plugin(HtmlPage::new("index.html").chunk("home"));
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, script) in &config.entry {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some("Give every entry script a name".to_string()),
                });
            }
            if script.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has an empty script path"),
                    hint: None,
                });
            }
        }

        // Page chunks must reference declared entries
        for page in config.html_pages() {
            for chunk in &page.chunks {
                if !config.entry.contains_key(chunk) {
                    return Err(ConfigError::UnresolvedEntry {
                        name: chunk.clone(),
                        page: normalize_output_name(&page.filename).to_string(),
                    });
                }
            }
        }

        for (number, rule) in (1..).zip(&config.module.rules) {
            if rule.chain.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule #{number} (`{}`) has no loaders", rule.test),
                    hint: Some("Add at least one loader to `use`".to_string()),
                });
            }
            if rule.chain.iter().any(|step| step.loader.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule #{number} (`{}`) has an unnamed loader", rule.test),
                    hint: None,
                });
            }
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "devServer.port".to_string(),
                hint: Some("Use a port between 1 and 65535".to_string()),
            });
        }

        if config.entry.len() > 1 && !config.output.has_name_placeholder() {
            return Err(ConfigError::OutputConflict(format!(
                "{} entries all write to '{}'; add a [name] placeholder to output.filename",
                config.entry.len(),
                config.output.filename
            )));
        }

        let mut written = HashSet::new();
        for output in config.planned_outputs() {
            if !written.insert(output.filename.clone()) {
                return Err(ConfigError::OutputConflict(format!(
                    "more than one output writes '{}'",
                    output.filename
                )));
            }
        }

        debug!(entries = config.entry.len(), "schema validation passed");
        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then confirms entry scripts and page templates
/// exist. Relative paths are resolved against `root`.
///
/// # Example
///
/// ```no_run
/// use sitepack_config::{build_configuration, resolve_paths, ConfigValidator, FsValidator};
///
/// let config = build_configuration(&resolve_paths("."));
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for script in config.entry.values() {
            let path = self.root.join(script);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for page in config.html_pages() {
            if let Some(template) = &page.template {
                let path = self.root.join(template);
                if !path.is_file() {
                    return Err(ConfigError::TemplateNotFound { path });
                }
            }
        }

        debug!(root = %self.root.display(), "filesystem validation passed");
        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
