//! Command-line interface definition for sitepack.
//!
//! # Command Structure
//!
//! - `sitepack show` - Print the resolved configuration
//! - `sitepack check` - Validate the configuration
//! - `sitepack match <FILE>` - Show which rule governs a file
//! - `sitepack outputs` - List the files a build writes
//! - `sitepack schema` - Print the JSON Schema of the configuration

mod commands;
pub mod enums;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, MatchArgs, OutputsArgs, ShowArgs};
pub use enums::*;

/// sitepack - resolve and inspect multi-page bundler configurations
#[derive(Parser, Debug)]
#[command(
    name = "sitepack",
    version,
    about = "Resolve and inspect multi-page bundler configurations",
    long_about = "sitepack resolves the configuration a multi-page site hands to its bundler:\n\
                  entry scripts, output naming, loader rules, dev-server settings and\n\
                  HTML/CSS generation plugins. Overrides come from sitepack.toml,\n\
                  sitepack.json and SITEPACK_* environment variables."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Explicit config file instead of discovering sitepack.toml / sitepack.json
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
