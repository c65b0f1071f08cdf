//! sitepack CLI - resolve and inspect bundler configurations.
//!
//! This is the main entry point for the sitepack CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use sitepack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // The schema does not depend on any project configuration
    if let cli::Command::Schema = args.command {
        return commands::schema_execute().map_err(error::cli_error_to_miette);
    }

    let ctx = commands::Context::from_cli(&args).map_err(error::cli_error_to_miette)?;

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Show(show_args) => commands::show_execute(&ctx, show_args),
        cli::Command::Check(check_args) => commands::check_execute(&ctx, check_args),
        cli::Command::Match(match_args) => commands::match_execute(&ctx, match_args),
        cli::Command::Outputs(outputs_args) => commands::outputs_execute(&ctx, outputs_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
