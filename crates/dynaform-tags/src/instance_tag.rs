//! Controls bound to one attribute of a record.

use dynaform_model::{FieldValue, Record};
use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::config::TagConfig;
use crate::markup::Markup;
use crate::tag::{content_tag, tag, Attrs};

/// Names and values for the controls of `object_name[method]`.
///
/// ```
/// use dynaform_model::{Column, DynamicRecord};
/// use dynaform_tags::{InstanceTag, TagConfig};
///
/// let post = DynamicRecord::new()
///     .column(Column::string("title"))
///     .attr("title", "Hello World");
/// let config = TagConfig::default();
///
/// let html = InstanceTag::new("post", "title", &post, &config).text_field();
/// assert_eq!(
///     html.as_str(),
///     r#"<input id="post_title" name="post[title]" size="30" type="text" value="Hello World" />"#,
/// );
/// ```
pub struct InstanceTag<'a> {
    object_name: &'a str,
    method: &'a str,
    record: &'a dyn Record,
    config: &'a TagConfig,
}

impl<'a> InstanceTag<'a> {
    /// Binds a control to `record`'s `method` attribute.
    pub fn new(
        object_name: &'a str,
        method: &'a str,
        record: &'a dyn Record,
        config: &'a TagConfig,
    ) -> Self {
        Self {
            object_name,
            method,
            record,
            config,
        }
    }

    /// `post_title`
    pub fn tag_id(&self) -> String {
        tag_id(self.object_name, self.method)
    }

    /// `post[title]`
    pub fn tag_name(&self) -> String {
        format!("{}[{}]", self.object_name, self.method)
    }

    /// The attribute's current value.
    pub fn value(&self) -> FieldValue {
        self.record.value(self.method)
    }

    /// Single-line input of the given `type`.
    pub fn input_field(&self, field_type: &str) -> Markup {
        let mut attrs = Attrs::new()
            .with("id", self.tag_id())
            .with("name", self.tag_name())
            .with("type", field_type);

        if field_type != "hidden" {
            attrs.set("size", self.config.text_field_size.to_string());
        }
        if field_type != "password" {
            if let Some(value) = self.value().to_param() {
                attrs.set("value", value);
            }
        }

        tag("input", &attrs)
    }

    /// `<input type="text">`
    pub fn text_field(&self) -> Markup {
        self.input_field("text")
    }

    /// `<input type="password">`; the current value is never echoed.
    pub fn password_field(&self) -> Markup {
        self.input_field("password")
    }

    /// `<input type="hidden">`
    pub fn hidden_field(&self) -> Markup {
        self.input_field("hidden")
    }

    /// `<textarea>` holding the escaped current value.
    pub fn text_area(&self) -> Markup {
        let attrs = Attrs::new()
            .with("cols", self.config.text_area_cols.to_string())
            .with("id", self.tag_id())
            .with("name", self.tag_name())
            .with("rows", self.config.text_area_rows.to_string());
        let content = Markup::escape(&self.value().to_param().unwrap_or_default());
        content_tag("textarea", &content, &attrs)
    }

    /// A `False`/`True` select for boolean attributes.
    pub fn boolean_select(&self) -> Markup {
        let selected = self.value().as_bool();
        let options: String = [(false, "False"), (true, "True")]
            .into_iter()
            .map(|(value, label)| {
                let selected_attr = if selected == Some(value) {
                    r#" selected="selected""#
                } else {
                    ""
                };
                format!(r#"<option value="{value}"{selected_attr}>{label}</option>"#)
            })
            .collect();

        content_tag(
            "select",
            &Markup::trusted(options),
            &Attrs::new()
                .with("id", self.tag_id())
                .with("name", self.tag_name()),
        )
    }
}

/// Builds a DOM id from an object name and attribute: `post`, `title`
/// gives `post_title`. Characters that are not valid in ids become `_`.
pub fn tag_id(object_name: &str, method: &str) -> String {
    let object = sanitize(object_name);
    let method = method.trim_end_matches('?');
    format!("{object}_{}", sanitize(method))
}

fn sanitize(name: &str) -> String {
    let replaced: String = name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    replaced.trim_end_matches('_').to_string()
}

/// `<label for="post_title">Title</label>`; `text` is escaped.
pub fn label(object_name: &str, method: &str, text: &str) -> Markup {
    let id = tag_id(object_name, method);
    let label_el = html! {
        label.for_(#id) { #text }
    };
    Markup::trusted(label_el.render())
}

/// Wraps markup in the error container without touching it.
pub fn error_wrapper(inner: &Markup, class: &str) -> Markup {
    let wrapper: Element<Div> = html! { div.class(#class) };
    Markup::trusted(wrapper.raw(inner.as_str()).render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynaform_model::{Column, DynamicRecord};

    fn post() -> DynamicRecord {
        DynamicRecord::new()
            .column(Column::string("title"))
            .column(Column::text("body"))
            .column(Column::string("password"))
            .column(Column::boolean("published"))
            .attr("title", "Hello World")
            .attr("body", "Back to the hill and over it again!")
            .attr("password", "secret")
            .attr("published", true)
            .persisted(1)
    }

    #[test]
    fn test_text_field() {
        let record = post();
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "title", &record, &config).text_field();
        assert_eq!(
            html.as_str(),
            r#"<input id="post_title" name="post[title]" size="30" type="text" value="Hello World" />"#
        );
    }

    #[test]
    fn test_hidden_field_has_no_size() {
        let record = post();
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "id", &record, &config).hidden_field();
        assert_eq!(
            html.as_str(),
            r#"<input id="post_id" name="post[id]" type="hidden" value="1" />"#
        );
    }

    #[test]
    fn test_password_value_not_echoed() {
        let record = post();
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "password", &record, &config).password_field();
        assert!(html.as_str().contains(r#"type="password""#));
        assert!(!html.as_str().contains("secret"));
    }

    #[test]
    fn test_text_area() {
        let record = post();
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "body", &record, &config).text_area();
        assert_eq!(
            html.as_str(),
            r#"<textarea cols="40" id="post_body" name="post[body]" rows="20">Back to the hill and over it again!</textarea>"#
        );
    }

    #[test]
    fn test_text_area_escapes_content() {
        let record = DynamicRecord::new()
            .column(Column::text("body"))
            .attr("body", "<script>alert(1)</script>");
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "body", &record, &config).text_area();
        assert!(html.as_str().contains("&lt;script&gt;"));
        assert!(!html.as_str().contains("<script>"));
    }

    #[test]
    fn test_missing_value_has_no_value_attr() {
        let record = DynamicRecord::new().column(Column::string("email"));
        let config = TagConfig::default();
        let html = InstanceTag::new("user", "email", &record, &config).text_field();
        assert!(!html.as_str().contains("value="));
    }

    #[test]
    fn test_boolean_select() {
        let record = post();
        let config = TagConfig::default();
        let html = InstanceTag::new("post", "published", &record, &config).boolean_select();
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<select id="post_published" name="post[published]">"#,
                r#"<option value="false">False</option>"#,
                r#"<option value="true" selected="selected">True</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_tag_id_sanitizes() {
        assert_eq!(tag_id("post", "title"), "post_title");
        assert_eq!(tag_id("post[author]", "name"), "post_author_name");
        assert_eq!(tag_id("post", "published?"), "post_published");
    }

    #[test]
    fn test_label_and_wrapper() {
        let html = label("post", "written_on", "Written on");
        assert!(html.as_str().contains(r#"for="post_written_on""#));
        assert!(html.as_str().contains("Written on"));

        let inner = Markup::trusted(r#"<input name="x" />"#);
        let wrapped = error_wrapper(&inner, "fieldWithErrors");
        assert!(wrapped.as_str().contains("fieldWithErrors"));
        assert!(wrapped.as_str().contains(r#"<input name="x" />"#));
    }
}
