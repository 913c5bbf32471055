//! Validation errors attached to a record.

use std::fmt;

use crate::column::humanize;

/// Read access to the validation errors of a record.
///
/// Forms only ever read errors; collecting them is the record's business.
pub trait ErrorCollection {
    /// Returns whether the record has no errors at all.
    fn is_empty(&self) -> bool;

    /// Returns the messages recorded for one field, in insertion order.
    fn on(&self, field: &str) -> Vec<String>;

    /// Returns the total number of messages.
    fn count(&self) -> usize;

    /// Returns every message prefixed with its humanized field name.
    fn full_messages(&self) -> Vec<String>;
}

/// Name under which errors that belong to no particular field are stored.
pub const BASE: &str = "base";

/// Insertion-ordered validation errors keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.entries.push((field.to_string(), message.into()));
    }

    /// Adds an error that is not tied to a field.
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.add(BASE, message);
    }

    /// Builder variant of [`FieldErrors::add`].
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the names of fields with errors, first occurrence first.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for (field, _) in &self.entries {
            if !fields.contains(&field.as_str()) {
                fields.push(field);
            }
        }
        fields
    }
}

impl ErrorCollection for FieldErrors {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn on(&self, field: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(name, _)| name == field)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(field, message)| {
                if field == BASE {
                    message.clone()
                } else {
                    format!("{} {message}", humanize(field))
                }
            })
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.full_messages() {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_returns_field_messages() {
        let errors = FieldErrors::new()
            .with("author_name", "can't be empty")
            .with("body", "foo")
            .with("author_name", "is too short");

        assert_eq!(errors.on("author_name"), vec!["can't be empty", "is too short"]);
        assert_eq!(errors.on("body"), vec!["foo"]);
        assert!(errors.on("title").is_empty());
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.fields(), vec!["author_name", "body"]);
    }

    #[test]
    fn test_full_messages() {
        let mut errors = FieldErrors::new();
        errors.add("author_name", "can't be empty");
        errors.add_to_base("Record is locked");

        assert_eq!(
            errors.full_messages(),
            vec!["Author name can't be empty", "Record is locked"]
        );
        assert_eq!(errors.to_string(), "Author name can't be empty\nRecord is locked\n");
    }

    #[test]
    fn test_empty() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        errors.add("email", "nonempty");
        assert!(!errors.is_empty());
        errors.clear();
        assert!(errors.is_empty());
    }
}
