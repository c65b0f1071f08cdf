//! Outputs command implementation.

use crate::cli::OutputsArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::ui;

/// List the files a build of the configuration writes.
pub fn execute(ctx: &Context, args: OutputsArgs) -> Result<()> {
    let outputs = ctx.config.planned_outputs();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    let output_dir = ctx.output_dir();
    let table = if args.absolute {
        ui::format_output_table(&outputs, Some(output_dir.as_path()))
    } else {
        ui::format_output_table(&outputs, None)
    };

    print!("{table}");
    ui::debug(&format!("output directory: {}", output_dir.display()));
    Ok(())
}
