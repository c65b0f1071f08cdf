use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::SerializationFormat;

/// Available sitepack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    ///
    /// Starts from the stock configuration for the project root and applies
    /// file and environment overrides.
    Show(ShowArgs),

    /// Validate the configuration
    ///
    /// Checks that every page chunk names a declared entry, that rules have
    /// loaders and that no two outputs collide. With --fs, entry scripts and
    /// templates must also exist.
    Check(CheckArgs),

    /// Show which transform rule governs a file
    ///
    /// The first matching rule wins; shadowed matches are listed as well.
    Match(MatchArgs),

    /// List the files a build writes into the output directory
    Outputs(OutputsArgs),

    /// Print the JSON Schema of the configuration record
    Schema,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Serialization format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: SerializationFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also require entry scripts and page templates to exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// File path, as the bundler would see it
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the outputs command
#[derive(Args, Debug)]
pub struct OutputsArgs {
    /// Print absolute paths under the output directory
    #[arg(long)]
    pub absolute: bool,

    /// Print as JSON instead of a table
    #[arg(long, conflicts_with = "absolute")]
    pub json: bool,
}
