//! Tag builder configuration.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TagError};

/// Largest accepted `year_span`.
pub const MAX_YEAR_SPAN: i32 = 200;

/// Settings shared by the standard tag builders.
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```
/// use dynaform_tags::TagConfig;
///
/// let config = TagConfig::from_json(r#"{"text_field_size": 40}"#).unwrap();
/// assert_eq!(config.text_field_size, 40);
/// assert_eq!(config.field_error_class, "fieldWithErrors");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// `size` attribute of single-line text inputs.
    pub text_field_size: usize,
    /// `cols` attribute of text areas.
    pub text_area_cols: usize,
    /// `rows` attribute of text areas.
    pub text_area_rows: usize,
    /// Class of the container around fields with errors.
    pub field_error_class: String,
    /// Years listed before and after the selected year.
    pub year_span: i32,
    /// Year the year select centers on when a field has no value.
    /// Falls back to the current year.
    pub reference_year: Option<i32>,
    /// `name` attribute of the submit input.
    pub submit_name: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            text_field_size: 30,
            text_area_cols: 40,
            text_area_rows: 20,
            field_error_class: "fieldWithErrors".to_string(),
            year_span: 5,
            reference_year: None,
            submit_name: "commit".to_string(),
        }
    }
}

impl TagConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `year_span` is within `0..=MAX_YEAR_SPAN` and that
    /// `reference_year` is a representable calendar year.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_YEAR_SPAN).contains(&self.year_span) {
            return Err(TagError::OutOfRange {
                field: "year_span",
                value: i64::from(self.year_span),
            });
        }
        if let Some(year) = self.reference_year {
            if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
                return Err(TagError::OutOfRange {
                    field: "reference_year",
                    value: i64::from(year),
                });
            }
        }
        Ok(())
    }

    /// Sets the year the year select centers on when there is no value.
    #[must_use]
    pub fn reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Sets the class of the error container.
    #[must_use]
    pub fn field_error_class(mut self, class: impl Into<String>) -> Self {
        self.field_error_class = class.into();
        self
    }
}
