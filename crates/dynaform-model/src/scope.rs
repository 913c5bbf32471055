//! Name-based record lookup.

use std::collections::HashMap;
use std::fmt;

use crate::record::Record;

/// Resolves the record a view refers to by name.
pub trait RecordResolver {
    /// Returns the record registered under `name`, if any.
    fn resolve(&self, name: &str) -> Option<&dyn Record>;
}

/// The set of records a view has in scope, keyed by name.
///
/// ```
/// use dynaform_model::{Column, DynamicRecord, RecordResolver, RecordScope};
///
/// let scope = RecordScope::new()
///     .assign("post", DynamicRecord::new().column(Column::string("title")));
///
/// assert!(scope.resolve("post").is_some());
/// assert!(scope.resolve("user").is_none());
/// ```
#[derive(Default)]
pub struct RecordScope {
    records: HashMap<String, Box<dyn Record + Send + Sync>>,
}

impl fmt::Debug for RecordScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordScope")
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}

impl RecordScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a record to a name, replacing any previous one.
    #[must_use]
    pub fn assign(mut self, name: &str, record: impl Record + Send + Sync + 'static) -> Self {
        self.insert(name, record);
        self
    }

    /// Inserts a record under a name, replacing any previous one.
    pub fn insert(&mut self, name: &str, record: impl Record + Send + Sync + 'static) {
        self.records.insert(name.to_string(), Box::new(record));
    }

    /// Removes the record registered under `name`.
    pub fn remove(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Returns whether a record is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl RecordResolver for RecordScope {
    fn resolve(&self, name: &str) -> Option<&dyn Record> {
        self.records
            .get(name)
            .map(|record| &**record as &dyn Record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::record::DynamicRecord;

    #[test]
    fn test_assign_and_resolve() {
        let scope = RecordScope::new()
            .assign("user", DynamicRecord::new().column(Column::string("email")))
            .assign("post", DynamicRecord::new().persisted(1));

        assert_eq!(scope.names(), vec!["post", "user"]);
        assert!(scope.contains("user"));
        let post = scope.resolve("post").unwrap();
        assert!(!post.is_new_record());
        assert!(scope.resolve("comment").is_none());
    }

    #[test]
    fn test_reassign_replaces() {
        let mut scope = RecordScope::new().assign("post", DynamicRecord::new());
        scope.insert("post", DynamicRecord::new().persisted(3));
        assert_eq!(scope.resolve("post").unwrap().id(), Some("3".to_string()));
        assert!(scope.remove("post"));
        assert!(!scope.contains("post"));
    }
}
