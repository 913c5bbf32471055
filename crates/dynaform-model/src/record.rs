//! Record trait and an in-memory record.

use std::collections::HashMap;

use crate::column::Column;
use crate::error::{ModelError, Result};
use crate::field_errors::{ErrorCollection, FieldErrors};
use crate::value::FieldValue;

/// A data record that a form can be generated for.
///
/// Implementations expose their schema, their attribute values and their
/// current validation errors. Nothing here writes to the record.
///
/// # Example
///
/// ```
/// use dynaform_model::{Column, DynamicRecord, Record};
///
/// let post = DynamicRecord::new()
///     .column(Column::string("title"))
///     .column(Column::text("body"))
///     .attr("title", "Hello World")
///     .persisted(1);
///
/// assert!(!post.is_new_record());
/// assert_eq!(post.id(), Some("1".to_string()));
/// assert_eq!(post.content_columns().len(), 2);
/// ```
pub trait Record {
    /// Returns whether the record has not been saved yet.
    fn is_new_record(&self) -> bool;

    /// Returns the identity of a saved record as a URL parameter.
    fn id(&self) -> Option<String>;

    /// Returns the editable columns in schema order.
    fn content_columns(&self) -> Vec<Column>;

    /// Returns the value of an attribute.
    fn value(&self, field: &str) -> FieldValue;

    /// Returns the current validation errors.
    fn errors(&self) -> &dyn ErrorCollection;

    /// Finds the content column with the given name.
    fn column_for_attribute(&self, field: &str) -> Option<Column> {
        self.content_columns()
            .into_iter()
            .find(|column| column.name == field)
    }
}

/// A record held entirely in memory.
#[derive(Debug, Clone)]
pub struct DynamicRecord {
    columns: Vec<Column>,
    values: HashMap<String, FieldValue>,
    id: Option<String>,
    new_record: bool,
    errors: FieldErrors,
}

impl Default for DynamicRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicRecord {
    /// Creates a new, unsaved record without columns.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            values: HashMap::new(),
            id: None,
            new_record: true,
            errors: FieldErrors::new(),
        }
    }

    /// Appends a content column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Sets an attribute value. Read it back through [`Record::value`].
    #[must_use]
    pub fn attr(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Marks the record as saved under the given identity.
    #[must_use]
    pub fn persisted(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self.new_record = false;
        self
    }

    /// Marks the record as saved without assigning an identity.
    #[must_use]
    pub fn mark_persisted(mut self) -> Self {
        self.new_record = false;
        self
    }

    /// Adds a validation error.
    #[must_use]
    pub fn error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Replaces the validation errors.
    #[must_use]
    pub fn errors_from(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Sets the value of an existing column.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<()> {
        if !self.columns.iter().any(|column| column.name == field) {
            return Err(ModelError::UnknownColumn(field.to_string()));
        }
        self.values.insert(field.to_string(), value.into());
        Ok(())
    }

    /// Parses and sets the value of an existing column from submitted text.
    pub fn set_raw(&mut self, field: &str, raw: &str) -> Result<()> {
        let column = self
            .columns
            .iter()
            .find(|column| column.name == field)
            .ok_or_else(|| ModelError::UnknownColumn(field.to_string()))?;
        let value = FieldValue::parse(field, &column.kind, raw)?;
        self.values.insert(field.to_string(), value);
        Ok(())
    }

    /// Returns mutable access to the validation errors.
    pub fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }
}

impl Record for DynamicRecord {
    fn is_new_record(&self) -> bool {
        self.new_record
    }

    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn content_columns(&self) -> Vec<Column> {
        self.columns.clone()
    }

    fn value(&self, field: &str) -> FieldValue {
        if field == "id" {
            return self.id.clone().map_or(FieldValue::Null, FieldValue::Text);
        }
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn errors(&self) -> &dyn ErrorCollection {
        &self.errors
    }
}
