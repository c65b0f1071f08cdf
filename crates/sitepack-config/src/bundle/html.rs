use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::helpers::{default_html_filename, default_true};

/// HTML page generated after all entries compile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPage {
    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Template rendered into the page (`.pug`, `.html` or `.ejs`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Entry names whose bundles are injected into this page
    #[serde(default)]
    pub chunks: Vec<String>,

    /// Output filename relative to the output directory (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Inject script and style tags for the selected chunks
    #[serde(default = "default_true")]
    pub inject: bool,

    /// Extra tags injected into the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_extras: Option<InjectExtras>,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self {
            title: None,
            template: None,
            chunks: Vec::new(),
            filename: default_html_filename(),
            inject: true,
            inject_extras: None,
        }
    }
}

impl HtmlPage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn chunk(mut self, name: impl Into<String>) -> Self {
        self.chunks.push(name.into());
        self
    }

    pub fn head_tag(mut self, tag: TagDescriptor) -> Self {
        self.inject_extras
            .get_or_insert_with(InjectExtras::default)
            .head
            .push(tag);
        self
    }

    /// Head tags to inject, empty when no extras are configured.
    pub fn head_tags(&self) -> &[TagDescriptor] {
        self.inject_extras
            .as_ref()
            .map(|extras| extras.head.as_slice())
            .unwrap_or_default()
    }
}

/// Extra tags grouped by insertion point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InjectExtras {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<TagDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<TagDescriptor>,
}

/// A single HTML tag, e.g. `{ tag = "meta", charset = "UTF-8" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagDescriptor {
    pub tag: String,

    /// Attributes, in declaration order
    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,
}

impl TagDescriptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Render as a void HTML element.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::TagDescriptor;
    ///
    /// let tag = TagDescriptor::new("meta").attr("charset", "UTF-8");
    /// assert_eq!(tag.to_html(), r#"<meta charset="UTF-8">"#);
    /// ```
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
        }
        html.push('>');
        html
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_attributes_flatten_and_keep_order() {
        let tag = TagDescriptor::new("meta")
            .attr("charset", "UTF-8")
            .attr("name", "description");
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            value,
            json!({ "tag": "meta", "charset": "UTF-8", "name": "description" })
        );
        assert_eq!(
            tag.to_html(),
            r#"<meta charset="UTF-8" name="description">"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let tag = TagDescriptor::new("meta").attr("content", r#"a "b" & <c>"#);
        assert_eq!(
            tag.to_html(),
            r#"<meta content="a &quot;b&quot; &amp; &lt;c>">"#
        );
    }

    #[test]
    fn page_defaults_from_empty_object() {
        let page: HtmlPage = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.filename, "index.html");
        assert!(page.inject);
        assert!(page.head_tags().is_empty());
    }

    #[test]
    fn head_tag_creates_extras() {
        let page = HtmlPage::new("a.html").head_tag(TagDescriptor::new("link"));
        assert_eq!(page.head_tags().len(), 1);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["injectExtras"]["head"][0]["tag"], "link");
    }
}
