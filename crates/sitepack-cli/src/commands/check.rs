//! Check command implementation.
//!
//! Validates the resolved configuration without building.

use sitepack_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Schema checks: entries, page chunks, rule loaders, port, output names
/// 2. With `--fs`: entry scripts and page templates exist under the root
/// 3. Warn about entries that no page includes
pub fn execute(ctx: &Context, args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    if args.fs {
        FsValidator::new(&ctx.root).validate(&ctx.config)?;
        ui::success(&format!(
            "{} entry scripts and templates found",
            ctx.config.entry.len()
        ));
    } else {
        SchemaValidator.validate(&ctx.config)?;
    }

    report_warnings(ctx);

    ui::success("Configuration is valid");
    Ok(())
}

fn report_warnings(ctx: &Context) {
    let config = &ctx.config;

    if config.html_pages().next().is_none() {
        ui::warning("No HTML pages are generated; bundles are not referenced by any page");
    }

    for name in config.entry_names() {
        let referenced = config
            .html_pages()
            .any(|page| page.chunks.iter().any(|chunk| chunk == name));
        if !referenced {
            ui::warning(&format!("Entry '{name}' is not included in any page"));
        }
    }
}
