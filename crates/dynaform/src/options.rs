//! Form generation options.

use std::fmt;

use dynaform_model::{Column, Record};
use dynaform_tags::{Markup, Method};
use serde::Deserialize;

use crate::error::{FormError, Result};

/// Renders one column in place of the default label and input.
pub type InputBlock<'a> = Box<dyn Fn(&dyn Record, &Column) -> Markup + 'a>;

/// Options for [`FormAssembler::form`](crate::FormAssembler::form).
///
/// | option         | default                                          |
/// |----------------|--------------------------------------------------|
/// | `action`       | `create` for new records, otherwise `update`     |
/// | `method`       | `post`                                           |
/// | `multipart`    | `false`                                          |
/// | `submit_value` | the action without non-word characters, capitalized |
/// | `input_block`  | label, line break and kind-specific input        |
#[derive(Default)]
pub struct FormOptions<'a> {
    /// Action the form submits to.
    pub action: Option<String>,
    /// HTTP method.
    pub method: Method,
    /// Whether the form uploads files.
    pub multipart: bool,
    /// Text of the submit button.
    pub submit_value: Option<String>,
    /// Per-column renderer replacing the default one.
    pub input_block: Option<InputBlock<'a>>,
}

impl fmt::Debug for FormOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOptions")
            .field("action", &self.action)
            .field("method", &self.method)
            .field("multipart", &self.multipart)
            .field("submit_value", &self.submit_value)
            .field("input_block", &self.input_block.is_some())
            .finish()
    }
}

impl<'a> FormOptions<'a> {
    /// Creates options with every default in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the action.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Switches the encoding to `multipart/form-data`.
    #[must_use]
    pub fn multipart(mut self, multipart: bool) -> Self {
        self.multipart = multipart;
        self
    }

    /// Sets the submit button text.
    #[must_use]
    pub fn submit_value(mut self, value: impl Into<String>) -> Self {
        self.submit_value = Some(value.into());
        self
    }

    /// Replaces the per-column renderer.
    #[must_use]
    pub fn input_block(mut self, block: impl Fn(&dyn Record, &Column) -> Markup + 'a) -> Self {
        self.input_block = Some(Box::new(block));
        self
    }

    /// Reads options from a JSON object such as request or template data.
    ///
    /// Unknown keys, unsupported methods and blank actions are rejected.
    /// `input_block` cannot be expressed in JSON.
    ///
    /// ```
    /// use dynaform::FormOptions;
    /// use dynaform_tags::Method;
    /// use serde_json::json;
    ///
    /// let options = FormOptions::from_json(&json!({"method": "get", "multipart": true})).unwrap();
    /// assert_eq!(options.method, Method::Get);
    /// assert!(options.multipart);
    ///
    /// assert!(FormOptions::from_json(&json!({"colour": "red"})).is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<FormOptions<'static>> {
        let raw = RawOptions::deserialize(value)
            .map_err(|e| FormError::InvalidOptions(e.to_string()))?;

        let method = raw
            .method
            .as_deref()
            .map(str::parse::<Method>)
            .transpose()
            .map_err(|e| FormError::InvalidOptions(e.to_string()))?
            .unwrap_or_default();

        if let Some(action) = &raw.action {
            if action.trim().is_empty() {
                return Err(FormError::InvalidOptions("action must not be blank".to_string()));
            }
        }

        Ok(FormOptions {
            action: raw.action,
            method,
            multipart: raw.multipart.unwrap_or(false),
            submit_value: raw.submit_value,
            input_block: None,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    action: Option<String>,
    method: Option<String>,
    multipart: Option<bool>,
    submit_value: Option<String>,
}
