//! Show command implementation.

use crate::cli::{SerializationFormat, ShowArgs};
use crate::commands::Context;
use crate::error::Result;

/// Print the resolved configuration to stdout.
pub fn execute(ctx: &Context, args: ShowArgs) -> Result<()> {
    let rendered = match args.format {
        SerializationFormat::Json => ctx.config.to_json_pretty()?,
        SerializationFormat::Toml => ctx.config.to_toml_string()?,
    };

    println!("{}", rendered.trim_end());
    Ok(())
}
