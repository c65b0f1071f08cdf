//! Tests for the stock configuration and struct defaults.

use sitepack_config::{
    BuildConfig, CssBundle, DevServerConfig, HtmlPage, OutputConfig, OutputKind, StatsLevel,
    build_configuration, resolve_paths,
};
use std::path::{Path, PathBuf};

#[test]
fn build_config_defaults() {
    let config = BuildConfig::default();
    assert!(config.entry.is_empty());
    assert_eq!(config.output.path, PathBuf::from("dist"));
    assert!(config.module.rules.is_empty());
    assert!(config.plugins.is_empty());
}

#[test]
fn output_config_defaults() {
    let output = OutputConfig::default();
    assert_eq!(output.filename, "js/[name].bundle.js");
    assert!(output.has_name_placeholder());
}

#[test]
fn dev_server_defaults() {
    let dev = DevServerConfig::default();
    assert_eq!(dev.port, 9000);
    assert_eq!(dev.host, "localhost");
    assert!(!dev.compress);
    assert!(!dev.open);
    assert_eq!(dev.stats, StatsLevel::All);
}

#[test]
fn page_and_css_defaults() {
    let page = HtmlPage::default();
    assert_eq!(page.filename, "index.html");
    assert!(page.inject);
    assert!(page.chunks.is_empty());

    let css = CssBundle::default();
    assert_eq!(css.filename, "css/bundle.css");
    assert!(!css.disable);
    assert!(css.all_chunks);
}

#[test]
fn build_configuration_is_pure() {
    let paths = resolve_paths("/proj");
    assert_eq!(build_configuration(&paths), build_configuration(&paths));
    assert_eq!(
        build_configuration(&paths),
        build_configuration(&resolve_paths("/proj"))
    );
}

#[test]
fn stock_layout_matches_dist_tree() {
    let config = build_configuration(&resolve_paths("/proj"));
    let outputs = config.planned_outputs();

    let names: Vec<_> = outputs.iter().map(|o| o.filename.as_str()).collect();
    assert_eq!(
        names,
        [
            "index.html",
            "contact.html",
            "css/bundle.css",
            "js/home.bundle.js",
            "js/contact.bundle.js",
        ]
    );

    let kinds: Vec<_> = outputs.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        [
            OutputKind::Html,
            OutputKind::Html,
            OutputKind::Stylesheet,
            OutputKind::Script,
            OutputKind::Script,
        ]
    );
    assert_eq!(
        outputs[3].path_in(Path::new("/proj/dist")),
        Path::new("/proj/dist").join("js").join("home.bundle.js")
    );
}

#[test]
fn braced_template_names_both_bundles() {
    let mut config = build_configuration(&resolve_paths("/proj"));
    config.output.filename = "js/{name}.bundle.js".to_string();

    let scripts: Vec<_> = config
        .entry_names()
        .map(|name| config.output.filename_for(name))
        .collect();
    assert_eq!(scripts, ["js/home.bundle.js", "js/contact.bundle.js"]);
}

#[test]
fn stock_configuration_passes_schema_validation() {
    let config = build_configuration(&resolve_paths("/proj"));
    sitepack_config::validate_schema(&config).unwrap();
}
