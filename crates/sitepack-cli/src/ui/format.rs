//! Plain-text formatting for command output written to stdout.

use std::path::Path;

use sitepack_config::{PlannedOutput, TransformRule};

/// Render planned outputs as aligned `kind  path  [entry]` rows.
///
/// With `output_dir`, paths are joined onto it; otherwise they stay
/// relative to the output directory.
///
/// # Examples
///
/// ```
/// use sitepack_cli::ui::format_output_table;
/// use sitepack_config::{OutputKind, PlannedOutput};
///
/// let table = format_output_table(
///     &[PlannedOutput {
///         kind: OutputKind::Script,
///         filename: "js/home.bundle.js".to_string(),
///         entry: Some("home".to_string()),
///     }],
///     None,
/// );
/// assert_eq!(table, "js    js/home.bundle.js  (home)\n");
/// ```
pub fn format_output_table(outputs: &[PlannedOutput], output_dir: Option<&Path>) -> String {
    let rows: Vec<(String, String, Option<&str>)> = outputs
        .iter()
        .map(|output| {
            let path = match output_dir {
                Some(dir) => output.path_in(dir).display().to_string(),
                None => output.filename.clone(),
            };
            (output.kind.to_string(), path, output.entry.as_deref())
        })
        .collect();

    let path_width = rows.iter().map(|(_, path, _)| path.len()).max().unwrap_or(0);

    let mut table = String::new();
    for (kind, path, entry) in rows {
        let line = match entry {
            Some(entry) => format!("{kind:<5} {path:<path_width$}  ({entry})"),
            None => format!("{kind:<5} {path}"),
        };
        table.push_str(&line);
        table.push('\n');
    }
    table
}

/// Loader chain in the order loaders run on a file, joined with `→`.
///
/// Options are omitted; a loader that carries options gets a `*` suffix.
pub fn format_rule_chain(rule: &TransformRule) -> String {
    rule.application_order()
        .map(|step| {
            if step.options.is_empty() {
                step.loader.clone()
            } else {
                format!("{}*", step.loader)
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
