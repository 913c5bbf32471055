//! The view helper seam form generation is built on.

use dynaform_model::Record;

use crate::config::TagConfig;
use crate::date_select;
use crate::error::Result;
use crate::form_tag::{self, ForgeryProtection, Method};
use crate::instance_tag::{self, InstanceTag};
use crate::markup::Markup;
use crate::url::{ActionPath, UrlFor};

/// Tag builders, field controls and URL generation supplied by the host.
///
/// Every control method takes the object name used as field prefix, the
/// record and the attribute name. [`StandardHelpers`] is the default
/// implementation; hosts with their own markup conventions implement this
/// trait instead.
pub trait ViewHelpers {
    /// URL a form for `action` submits to.
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String>;

    /// Opening form tag, including any hidden fields the host requires.
    fn form_tag(&self, target: &str, method: Method, enctype: Option<&str>) -> Result<Markup>;

    /// Hidden input.
    fn hidden_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Single-line text input.
    fn text_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Password input.
    fn password_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Multi-line text area.
    fn text_area(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Year, month and day selects.
    fn date_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Date selects followed by hour and minute selects.
    fn datetime_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Hour and minute selects.
    fn time_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// True/false select.
    fn boolean_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup;

    /// Label pointing at the control of `object_name[method]`.
    fn label(&self, object_name: &str, method: &str, text: &str) -> Markup;

    /// Decorates the markup of a field that has validation errors.
    fn error_wrapper(&self, inner: Markup) -> Markup;

    /// Submit control.
    fn submit_tag(&self, value: &str) -> Markup;

    /// Closing form tag.
    fn end_form_tag(&self) -> Markup {
        form_tag::end_form_tag()
    }
}

/// Default helpers: `object[attribute]` field names, configurable through [`TagConfig`].
///
/// ```
/// use dynaform_tags::{Method, StandardHelpers, ViewHelpers};
///
/// let helpers = StandardHelpers::new().protect_against_forgery("authenticity_token", "123");
/// let html = helpers.form_tag("create", Method::Post, None).unwrap();
/// assert!(html.as_str().contains(r#"value="123""#));
/// ```
#[derive(Debug, Clone)]
pub struct StandardHelpers<U = ActionPath> {
    config: TagConfig,
    urls: U,
    forgery: Option<ForgeryProtection>,
}

impl Default for StandardHelpers<ActionPath> {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardHelpers<ActionPath> {
    /// Helpers that build `action/id` URLs.
    pub fn new() -> Self {
        Self::with_urls(ActionPath::new())
    }
}

impl<U: UrlFor> StandardHelpers<U> {
    /// Helpers that build URLs with `urls`.
    pub fn with_urls(urls: U) -> Self {
        Self {
            config: TagConfig::default(),
            urls,
            forgery: None,
        }
    }

    /// Replaces the tag configuration.
    #[must_use]
    pub fn config(mut self, config: TagConfig) -> Self {
        self.config = config;
        self
    }

    /// Embeds an authenticity token into non-GET forms.
    #[must_use]
    pub fn protect_against_forgery(
        mut self,
        param: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.forgery = Some(ForgeryProtection::new(param, token));
        self
    }

    /// Sets or clears forgery protection.
    #[must_use]
    pub fn forgery(mut self, forgery: Option<ForgeryProtection>) -> Self {
        self.forgery = forgery;
        self
    }

    /// Returns the tag configuration.
    pub fn tag_config(&self) -> &TagConfig {
        &self.config
    }

    fn instance_tag<'a>(
        &'a self,
        object_name: &'a str,
        record: &'a dyn Record,
        method: &'a str,
    ) -> InstanceTag<'a> {
        InstanceTag::new(object_name, method, record, &self.config)
    }
}

impl<U: UrlFor> ViewHelpers for StandardHelpers<U> {
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String> {
        self.urls.url_for(action, id)
    }

    fn form_tag(&self, target: &str, method: Method, enctype: Option<&str>) -> Result<Markup> {
        Ok(form_tag::form_tag(
            target,
            method,
            enctype,
            self.forgery.as_ref(),
        ))
    }

    fn hidden_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        self.instance_tag(object_name, record, method).hidden_field()
    }

    fn text_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        self.instance_tag(object_name, record, method).text_field()
    }

    fn password_field(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        self.instance_tag(object_name, record, method).password_field()
    }

    fn text_area(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        self.instance_tag(object_name, record, method).text_area()
    }

    fn date_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        date_select::date_select(object_name, method, &record.value(method), &self.config)
    }

    fn datetime_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        date_select::datetime_select(object_name, method, &record.value(method), &self.config)
    }

    fn time_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        date_select::time_select(object_name, method, &record.value(method))
    }

    fn boolean_select(&self, object_name: &str, record: &dyn Record, method: &str) -> Markup {
        self.instance_tag(object_name, record, method).boolean_select()
    }

    fn label(&self, object_name: &str, method: &str, text: &str) -> Markup {
        instance_tag::label(object_name, method, text)
    }

    fn error_wrapper(&self, inner: Markup) -> Markup {
        instance_tag::error_wrapper(&inner, &self.config.field_error_class)
    }

    fn submit_tag(&self, value: &str) -> Markup {
        form_tag::submit_tag(value, &self.config.submit_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::RouteMap;
    use crate::TagError;
    use chrono::NaiveDate;
    use dynaform_model::{Column, DynamicRecord};

    fn post() -> DynamicRecord {
        DynamicRecord::new()
            .column(Column::string("title"))
            .column(Column::date("written_on"))
            .attr("title", "Hello World")
            .attr("written_on", NaiveDate::from_ymd_opt(2004, 6, 15).unwrap())
    }

    #[test]
    fn test_default_urls() {
        let helpers = StandardHelpers::new();
        assert_eq!(helpers.url_for("update", Some("1")).unwrap(), "update/1");
    }

    #[test]
    fn test_route_map_urls() {
        let routes = RouteMap::new().route("update", "/posts/{id}").unwrap();
        let helpers = StandardHelpers::with_urls(routes);
        assert_eq!(helpers.url_for("update", Some("4")).unwrap(), "/posts/4");
        assert!(matches!(
            helpers.url_for("update", None),
            Err(TagError::MissingParam { .. })
        ));
    }

    #[test]
    fn test_controls_delegate() {
        let helpers = StandardHelpers::new();
        let record = post();

        let text = helpers.text_field("post", &record, "title");
        assert!(text.as_str().contains(r#"value="Hello World""#));

        let dates = helpers.date_select("post", &record, "written_on");
        assert_eq!(dates.as_str().matches("<select").count(), 3);

        assert_eq!(
            helpers.submit_tag("Create").as_str(),
            r#"<input name="commit" type="submit" value="Create" />"#
        );
        assert_eq!(helpers.end_form_tag().as_str(), "</form>");
    }

    #[test]
    fn test_custom_error_class() {
        let helpers = StandardHelpers::new().config(TagConfig::default().field_error_class("has-error"));
        let wrapped = helpers.error_wrapper(Markup::trusted("<i>x</i>"));
        assert!(wrapped.as_str().contains("has-error"));
        assert!(wrapped.as_str().contains("<i>x</i>"));
        assert_eq!(helpers.tag_config().field_error_class, "has-error");
    }

    #[test]
    fn test_forgery_toggle() {
        let helpers = StandardHelpers::new()
            .protect_against_forgery("authenticity_token", "abc")
            .forgery(None);
        let html = helpers.form_tag("create", Method::Post, None).unwrap();
        assert!(!html.as_str().contains("authenticity_token"));
    }
}
