//! Stock configuration for a multi-page site laid out as
//! `src/{scripts,templates,styles,images}` → `dist/`.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::bundle::{
    CssBundle, FILE_LOADER, FilePattern, HtmlPage, ModuleOptions, OutputConfig, OutputPlugin,
    TagDescriptor, TransformRule, TransformStep,
};
use crate::config::BuildConfig;
use crate::dev::{DevServerConfig, StatsLevel};
use crate::paths::ProjectPaths;

pub const DEFAULT_PORT: u16 = 9000;

/// Assemble the configuration for a project.
///
/// Pure: equal `paths` always give equal configurations. Nothing on disk is
/// checked here; see [`FsValidator`](crate::FsValidator) for that.
///
/// # Example
///
/// ```
/// use sitepack_config::{build_configuration, resolve_paths};
///
/// let config = build_configuration(&resolve_paths("/proj"));
/// assert_eq!(config.output.filename_for("home"), "js/home.bundle.js");
/// assert_eq!(config.dev_server.port, 9000);
/// ```
pub fn build_configuration(paths: &ProjectPaths) -> BuildConfig {
    let mut entry = IndexMap::new();
    entry.insert("home".to_string(), paths.source("scripts/home.js"));
    entry.insert("contact".to_string(), paths.source("scripts/contact.js"));

    let config = BuildConfig {
        entry,
        output: OutputConfig {
            path: paths.output_dir().to_path_buf(),
            filename: "js/[name].bundle.js".to_string(),
        },
        module: ModuleOptions {
            rules: default_rules(),
        },
        dev_server: DevServerConfig {
            content_base: paths.output_dir().to_path_buf(),
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            compress: true,
            stats: StatsLevel::ErrorsOnly,
            open: true,
        },
        plugins: vec![
            OutputPlugin::Html(
                HtmlPage::new("./index.html")
                    .title("Home")
                    .template(paths.source("templates/index.pug"))
                    .chunk("home")
                    .head_tag(
                        TagDescriptor::new("meta")
                            .attr("charset", "UTF-8")
                            .attr("name", "description")
                            .attr("content", "We can use injectExtrasHead option"),
                    ),
            ),
            OutputPlugin::Html(
                HtmlPage::new("./contact.html")
                    .title("Contact")
                    .template(paths.source("templates/contact.html"))
                    .chunk("contact"),
            ),
            OutputPlugin::ExtractCss(CssBundle {
                filename: "css/bundle.css".to_string(),
                disable: false,
                all_chunks: true,
            }),
        ],
    };

    debug!(
        entries = config.entry.len(),
        rules = config.module.rules.len(),
        plugins = config.plugins.len(),
        "assembled build configuration"
    );
    config
}

fn default_rules() -> Vec<TransformRule> {
    vec![
        TransformRule::new(pattern(r"\.js$"))
            .exclude(pattern("node_modules"))
            .step(TransformStep::new("babel-loader")),
        TransformRule::new(pattern(r"\.pug$"))
            .step(TransformStep::new("pug-loader").with_option("pretty", true)),
        TransformRule::new(pattern(r"\.(css|scss|sass)$")).step(TransformStep::extract(
            "style-loader",
            &["css-loader", "sass-loader"],
        )),
        TransformRule::new(pattern(r"\.(svg|png|jpe?g|gif|ico)$")).step(
            TransformStep::new(FILE_LOADER)
                .with_option("name", "[name].[ext]")
                .with_option("outputPath", Value::from("img/")),
        ),
    ]
}

// Built-in sources are fixed literals; a failure here is a programming error.
fn pattern(source: &str) -> FilePattern {
    FilePattern::new(source).unwrap_or_else(|err| panic!("built-in pattern `{source}`: {err}"))
}
