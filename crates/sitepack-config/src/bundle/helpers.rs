use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_bundle_filename() -> String {
    "js/[name].bundle.js".to_string()
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_css_filename() -> String {
    "css/bundle.css".to_string()
}

/// Strip a leading `./` so `./index.html` and `index.html` name the same file.
pub(crate) fn normalize_output_name(name: &str) -> &str {
    let mut name = name;
    while let Some(rest) = name.strip_prefix("./") {
        name = rest;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_dot_slash() {
        assert_eq!(normalize_output_name("./index.html"), "index.html");
        assert_eq!(normalize_output_name("././a/b.css"), "a/b.css");
        assert_eq!(normalize_output_name("js/x.js"), "js/x.js");
    }
}
