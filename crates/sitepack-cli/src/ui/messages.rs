//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream::Stderr};

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use sitepack_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |t| t.green()),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |t| t.blue()),
        message
    );
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use sitepack_cli::ui::warning;
///
/// warning("rule #3 is shadowed by rule #1 for src/app.js");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.yellow()),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}

/// Print a debug message to stderr (only if RUST_LOG is set).
pub fn debug(message: &str) {
    if std::env::var_os("RUST_LOG").is_some() {
        eprintln!(
            "{} {}",
            "◆".if_supports_color(Stderr, |t| t.dimmed()),
            message.if_supports_color(Stderr, |t| t.dimmed())
        );
    }
}
