//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, attaching its hint as help text
pub fn config_error_to_miette(err: ConfigError) -> Report {
    let code = match &err {
        ConfigError::UnresolvedEntry { .. } => "sitepack::unresolved_entry",
        ConfigError::EntryNotFound { .. } => "sitepack::entry_not_found",
        ConfigError::TemplateNotFound { .. } => "sitepack::template_not_found",
        ConfigError::OutputConflict(_) => "sitepack::output_conflict",
        ConfigError::NoEntries => "sitepack::no_entries",
        _ => "sitepack::config",
    };

    match err.hint() {
        Some(hint) => miette::miette!(code = code, help = hint.to_string(), "{}", err),
        None => miette::miette!(code = code, "{}", err),
    }
}
