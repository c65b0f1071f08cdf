use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bundle::css::CssBundle;
use crate::bundle::helpers::normalize_output_name;
use crate::bundle::html::HtmlPage;

/// Post-build generation step, invoked once after all entries compile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutputPlugin {
    /// Generate an HTML page that loads the selected chunks
    Html(HtmlPage),
    /// Extract stylesheets into a CSS bundle
    ExtractCss(CssBundle),
}

impl OutputPlugin {
    pub fn kind(&self) -> &'static str {
        match self {
            OutputPlugin::Html(_) => "html",
            OutputPlugin::ExtractCss(_) => "extract-css",
        }
    }

    /// File written by this plugin, relative to the output directory.
    ///
    /// A disabled CSS bundle writes nothing.
    pub fn output_filename(&self) -> Option<&str> {
        match self {
            OutputPlugin::Html(page) => Some(normalize_output_name(&page.filename)),
            OutputPlugin::ExtractCss(css) if css.disable => None,
            OutputPlugin::ExtractCss(css) => Some(normalize_output_name(&css.filename)),
        }
    }

    pub fn as_html(&self) -> Option<&HtmlPage> {
        match self {
            OutputPlugin::Html(page) => Some(page),
            OutputPlugin::ExtractCss(_) => None,
        }
    }

    pub fn as_css(&self) -> Option<&CssBundle> {
        match self {
            OutputPlugin::ExtractCss(css) => Some(css),
            OutputPlugin::Html(_) => None,
        }
    }
}

impl From<HtmlPage> for OutputPlugin {
    fn from(page: HtmlPage) -> Self {
        OutputPlugin::Html(page)
    }
}

impl From<CssBundle> for OutputPlugin {
    fn from(css: CssBundle) -> Self {
        OutputPlugin::ExtractCss(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plugins_are_tagged_by_kind() {
        let html = OutputPlugin::from(HtmlPage::new("./index.html").chunk("home"));
        let value = serde_json::to_value(&html).unwrap();
        assert_eq!(value["kind"], "html");
        assert_eq!(value["chunks"], json!(["home"]));

        let css: OutputPlugin =
            serde_json::from_value(json!({ "kind": "extract-css", "allChunks": false })).unwrap();
        let bundle = css.as_css().unwrap();
        assert_eq!(bundle.filename, "css/bundle.css");
        assert!(!bundle.all_chunks);
    }

    #[test]
    fn output_filename_is_normalized() {
        let html = OutputPlugin::from(HtmlPage::new("./contact.html"));
        assert_eq!(html.output_filename(), Some("contact.html"));

        let disabled = OutputPlugin::from(CssBundle {
            disable: true,
            ..CssBundle::default()
        });
        assert_eq!(disabled.output_filename(), None);
    }
}
