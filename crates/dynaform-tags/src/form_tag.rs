//! Form open/close tags, submit buttons and request forgery protection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagError;
use crate::markup::Markup;
use crate::tag::{content_tag, tag, Attrs};

/// Encoding used by forms that upload files.
pub const MULTIPART: &str = "multipart/form-data";

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Returns the lower-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// Returns whether browsers can submit this method natively.
    pub fn is_native(self) -> bool {
        matches!(self, Self::Get | Self::Post)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            _ => Err(TagError::InvalidMethod(s.to_string())),
        }
    }
}

/// Authenticity token embedded into every non-GET form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeryProtection {
    /// Request parameter carrying the token.
    pub param: String,
    /// Token for the current session.
    pub token: String,
}

impl ForgeryProtection {
    /// Creates a token field description.
    pub fn new(param: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            token: token.into(),
        }
    }

    /// Renders the hidden token input.
    pub fn token_tag(&self) -> Markup {
        tag(
            "input",
            &Attrs::new()
                .with("name", &self.param)
                .with("type", "hidden")
                .with("value", &self.token),
        )
    }
}

/// Renders the opening `<form>` tag.
///
/// Methods other than GET and POST are sent as POST with a hidden `_method`
/// field. Non-GET forms carry the authenticity token when forgery protection
/// is configured. Both hidden fields are grouped in an inline `div`.
///
/// ```
/// use dynaform_tags::{form_tag, Method};
///
/// let html = form_tag("create", Method::Post, None, None);
/// assert_eq!(html.as_str(), r#"<form action="create" method="post">"#);
/// ```
pub fn form_tag(
    target: &str,
    method: Method,
    enctype: Option<&str>,
    forgery: Option<&ForgeryProtection>,
) -> Markup {
    let html_method = if method == Method::Get { "get" } else { "post" };

    let attrs = Attrs::new()
        .with("action", target)
        .with("method", html_method)
        .with_opt("enctype", enctype);

    let mut hidden = Vec::new();
    if !method.is_native() {
        hidden.push(tag(
            "input",
            &Attrs::new()
                .with("name", "_method")
                .with("type", "hidden")
                .with("value", method.as_str()),
        ));
    }
    if method != Method::Get {
        if let Some(forgery) = forgery {
            hidden.push(forgery.token_tag());
        }
    }

    let open = Markup::trusted(format!("<form{}>", attrs.to_html()));
    if hidden.is_empty() {
        return open;
    }

    let extra = content_tag(
        "div",
        &hidden.into_iter().collect::<Markup>(),
        &Attrs::new().with("style", "margin:0;padding:0;display:inline"),
    );
    open.concat(extra)
}

/// Renders the closing `</form>` tag.
pub fn end_form_tag() -> Markup {
    Markup::trusted("</form>")
}

/// Renders a submit input.
pub fn submit_tag(value: &str, name: &str) -> Markup {
    tag(
        "input",
        &Attrs::new()
            .with("name", name)
            .with("type", "submit")
            .with("value", value),
    )
}
