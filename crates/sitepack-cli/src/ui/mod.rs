//! Terminal UI helpers: status messages and table formatting.
//!
//! Status messages go to stderr so that stdout stays machine-readable
//! (`sitepack show | jq`). Color is decided once in [`init_colors`].
//!
//! # Examples
//!
//! ```no_run
//! use sitepack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking configuration...");
//! ui::success("Configuration is valid");
//! ```

mod format;
mod messages;

pub use format::{format_output_table, format_rule_chain};
pub use messages::{debug, info, success, warning};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Check if color output should be enabled.
///
/// `--no-color` and `NO_COLOR` disable colors, `FORCE_COLOR` enables them
/// even without a terminal; otherwise stderr must be attended and not in CI.
pub fn should_use_color(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr() && !is_ci()
}

/// Initialize color support. Call once, early in `main`.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(should_use_color(no_color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_init_colors_does_not_panic() {
        init_colors(true);
        init_colors(false);
    }
}
