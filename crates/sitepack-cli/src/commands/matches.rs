//! Match command implementation.
//!
//! Reports which transform rule governs a file and how its loaders run.

use sitepack_config::TransformRule;

use crate::cli::MatchArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::ui;

/// Execute the match command.
///
/// Prints the winning rule to stdout; rules that also match but never apply
/// (first match wins) are reported as warnings.
pub fn execute(ctx: &Context, args: MatchArgs) -> Result<()> {
    let file = &args.file;
    let rules = &ctx.config.module.rules;

    let matching = ctx.config.overlapping_rules(file);
    let Some((&winner, shadowed)) = matching.split_first() else {
        ui::info(&format!("No rule matches {}", file.display()));
        return Ok(());
    };

    print!("{}", describe_rule(winner, &rules[winner]));

    if let Some(asset) = ctx.config.asset_output(file) {
        println!("  emits: {asset}");
    }

    for &index in shadowed {
        ui::warning(&format!(
            "rule #{} ({}) also matches {} but is shadowed by rule #{}",
            index + 1,
            rules[index].test,
            file.display(),
            winner + 1
        ));
    }

    Ok(())
}

fn describe_rule(index: usize, rule: &TransformRule) -> String {
    let mut out = format!("rule #{}: {}\n", index + 1, rule.test);
    if let Some(exclude) = &rule.exclude {
        out.push_str(&format!("  exclude: {exclude}\n"));
    }
    out.push_str(&format!("  loaders: {}\n", ui::format_rule_chain(rule)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepack_config::{FilePattern, TransformStep};

    #[test]
    fn test_describe_rule_numbers_from_one() {
        let rule = TransformRule::new(FilePattern::new(r"\.js$").unwrap())
            .exclude(FilePattern::new("node_modules").unwrap())
            .step(TransformStep::new("babel-loader"));

        let text = describe_rule(0, &rule);
        assert!(text.starts_with("rule #1: \\.js$\n"));
        assert!(text.contains("exclude: node_modules"));
        assert!(text.contains("loaders: babel-loader"));
    }
}
