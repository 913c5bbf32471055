//! Low-level tag serialization.

use std::collections::BTreeMap;

use crate::markup::{html_escape, Markup};

/// HTML attributes, rendered in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    /// Attribute values keyed by name.
    pub attrs: BTreeMap<String, String>,
}

impl Attrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set an attribute only when a value is present.
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Renders the attributes with a leading space, values escaped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }
}

/// Renders a void element: `<input name="x" />`.
pub fn tag(name: &str, attrs: &Attrs) -> Markup {
    Markup::trusted(format!("<{name}{} />", attrs.to_html()))
}

/// Renders an element around already-escaped content.
pub fn content_tag(name: &str, content: &Markup, attrs: &Attrs) -> Markup {
    Markup::trusted(format!("<{name}{}>{content}</{name}>", attrs.to_html()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_sorted_and_escaped() {
        let attrs = Attrs::new()
            .with("value", "Say \"hi\"")
            .with("type", "text")
            .with("id", "post_title");
        assert_eq!(
            attrs.to_html(),
            r#" id="post_title" type="text" value="Say &quot;hi&quot;""#
        );
    }

    #[test]
    fn test_with_opt() {
        let attrs = Attrs::new()
            .with_opt("enctype", None::<&str>)
            .with_opt("method", Some("post"));
        assert!(attrs.get("enctype").is_none());
        assert_eq!(attrs.get("method"), Some(&"post".to_string()));
    }

    #[test]
    fn test_tag() {
        let html = tag("input", &Attrs::new().with("name", "commit"));
        assert_eq!(html.as_str(), r#"<input name="commit" />"#);
    }

    #[test]
    fn test_content_tag_keeps_content() {
        let html = content_tag(
            "div",
            &Markup::trusted("<b>x</b>"),
            &Attrs::new().with("class", "note"),
        );
        assert_eq!(html.as_str(), r#"<div class="note"><b>x</b></div>"#);
    }
}
