//! Schema command implementation.

use sitepack_config::BuildConfig;

use crate::error::Result;

/// Print the JSON Schema of [`BuildConfig`], for editor completion of
/// `sitepack.json` files.
pub fn execute() -> Result<()> {
    let schema = schemars::schema_for!(BuildConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
