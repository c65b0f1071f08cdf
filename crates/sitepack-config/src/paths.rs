//! Project directory resolution.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

/// Directory holding entry scripts, templates and assets.
pub const SOURCE_DIR_NAME: &str = "src";

/// Directory the bundler writes into.
pub const OUTPUT_DIR_NAME: &str = "dist";

/// Source and output directories of a project.
///
/// Only constructed through [`resolve_paths`] or [`ProjectPaths::resolve_from`],
/// so `source_dir` always has at least one component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPaths {
    root: PathBuf,
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl ProjectPaths {
    /// Resolve against `cwd` when `project_root` is relative.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::ProjectPaths;
    /// use std::path::Path;
    ///
    /// let paths = ProjectPaths::resolve_from("site", "/work");
    /// assert_eq!(paths.source_dir(), Path::new("/work/site/src"));
    /// ```
    pub fn resolve_from(project_root: impl AsRef<Path>, cwd: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref();
        if root.is_absolute() {
            resolve_paths(root)
        } else {
            resolve_paths(cwd.as_ref().join(root))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Join a `/`-separated path below the source directory.
    pub fn source(&self, relative: &str) -> PathBuf {
        join_relative(&self.source_dir, relative)
    }
}

/// Compute `root/src` and `root/dist`.
///
/// Purely lexical: `.` and `..` components are folded and the host separator
/// is used, but the filesystem is never consulted.
///
/// # Example
///
/// ```
/// use sitepack_config::resolve_paths;
/// use std::path::Path;
///
/// let paths = resolve_paths("/proj");
/// assert_eq!(paths.source_dir(), Path::new("/proj/src"));
/// assert_eq!(paths.output_dir(), Path::new("/proj/dist"));
/// ```
pub fn resolve_paths(project_root: impl AsRef<Path>) -> ProjectPaths {
    let root = project_root.as_ref().to_path_buf().clean();
    let paths = ProjectPaths {
        source_dir: root.join(SOURCE_DIR_NAME),
        output_dir: root.join(OUTPUT_DIR_NAME),
        root,
    };
    debug!(
        source = %paths.source_dir.display(),
        output = %paths.output_dir.display(),
        "resolved project paths"
    );
    paths
}

fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |acc, part| acc.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_root_gets_src_and_dist() {
        let paths = resolve_paths("/proj");
        assert_eq!(paths.source_dir(), Path::new("/proj").join("src"));
        assert_eq!(paths.output_dir(), Path::new("/proj").join("dist"));
    }

    #[test]
    fn dot_segments_are_folded() {
        let paths = resolve_paths("/proj/./web/../site");
        assert_eq!(paths.root(), Path::new("/proj/site"));
        assert_eq!(paths.source_dir(), Path::new("/proj/site/src"));
    }

    #[test]
    fn relative_root_stays_relative() {
        let paths = resolve_paths("site");
        assert!(paths.source_dir().is_relative());
        assert_eq!(paths.output_dir(), Path::new("site").join("dist"));
    }

    #[test]
    fn resolve_from_anchors_relative_roots() {
        let paths = ProjectPaths::resolve_from("site", "/work");
        assert_eq!(paths.root(), Path::new("/work/site"));

        let absolute = ProjectPaths::resolve_from("/elsewhere", "/work");
        assert_eq!(absolute.root(), Path::new("/elsewhere"));
    }

    #[test]
    fn empty_root_still_yields_source_dir() {
        let paths = resolve_paths("");
        assert!(!paths.source_dir().as_os_str().is_empty());
    }

    #[test]
    fn source_joins_slash_separated_paths() {
        let paths = resolve_paths("/proj");
        assert_eq!(
            paths.source("scripts/home.js"),
            Path::new("/proj").join("src").join("scripts").join("home.js")
        );
    }
}
