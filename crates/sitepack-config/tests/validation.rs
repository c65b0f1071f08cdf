//! Tests for configuration validation.

use sitepack_config::{
    BuildConfig, ConfigError, ConfigValidator, FsValidator, HtmlPage, SchemaValidator,
    build_configuration, resolve_paths, validate_fs,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, contents).expect("write file");
}

fn scaffold(root: &Path) {
    write(root, "src/scripts/home.js", "import '../styles/main.scss';");
    write(root, "src/scripts/contact.js", "");
    write(root, "src/templates/index.pug", "html\n  body");
    write(root, "src/templates/contact.html", "<html></html>");
}

#[test]
fn stock_project_validates_on_disk() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());

    let config = build_configuration(&resolve_paths(dir.path()));
    assert!(FsValidator::new(dir.path()).validate(&config).is_ok());
}

#[test]
fn validate_catches_missing_entry() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/scripts/contact.js")).expect("remove");

    let config = build_configuration(&resolve_paths(dir.path()));
    match validate_fs(&config, dir.path()).unwrap_err() {
        ConfigError::EntryNotFound { path } => {
            assert!(path.ends_with("src/scripts/contact.js"));
        }
        other => panic!("expected EntryNotFound error, got {other:?}"),
    }
}

#[test]
fn validate_catches_missing_template() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/templates/index.pug")).expect("remove");

    let config = build_configuration(&resolve_paths(dir.path()));
    match validate_fs(&config, dir.path()).unwrap_err() {
        ConfigError::TemplateNotFound { path } => {
            assert!(path.ends_with("src/templates/index.pug"));
        }
        other => panic!("expected TemplateNotFound error, got {other:?}"),
    }
}

#[test]
fn relative_paths_resolve_against_root() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "app.js", "");
    write(dir.path(), "page.html", "");

    let config = BuildConfig::default()
        .with_entry("app", "app.js")
        .with_plugin(HtmlPage::new("index.html").template("page.html").chunk("app"));
    assert!(validate_fs(&config, dir.path()).is_ok());
}

#[test]
fn schema_errors_come_before_filesystem_errors() {
    let dir = TempDir::new().expect("tempdir");

    let config = BuildConfig::default()
        .with_entry("home", "missing/home.js")
        .with_entry("contact", "missing/contact.js")
        .with_plugin(HtmlPage::new("index.html").chunk("home").chunk("blog"));

    match FsValidator::new(dir.path()).validate(&config).unwrap_err() {
        ConfigError::UnresolvedEntry { name, .. } => assert_eq!(name, "blog"),
        other => panic!("expected UnresolvedEntry error, got {other:?}"),
    }
}

#[test]
fn unresolved_entry_message_names_it() {
    let config = BuildConfig::default()
        .with_entry("home", "home.js")
        .with_entry("contact", "contact.js")
        .with_plugin(HtmlPage::new("index.html").chunk("home").chunk("blog"));

    let err = SchemaValidator.validate(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "page 'index.html' references unknown entry 'blog'"
    );
    assert!(err.hint().is_some());
}
