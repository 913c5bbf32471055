//! # dynaform-model
//!
//! The record model that dynaform generates forms from.
//!
//! This crate provides:
//! - The `Record` trait (schema, values, identity, errors)
//! - Column descriptors with a closed set of storage kinds
//! - Typed attribute values backed by `chrono`
//! - Validation error collections
//! - `RecordScope`, the name-to-record lookup a view renders from
//!
//! ## Quick Start
//!
//! ```rust
//! use dynaform_model::{
//!     Column, DynamicRecord, ErrorCollection, Record, RecordResolver, RecordScope,
//! };
//!
//! let post = DynamicRecord::new()
//!     .column(Column::string("title"))
//!     .column(Column::text("body"))
//!     .attr("title", "Hello World")
//!     .error("body", "can't be blank");
//!
//! let scope = RecordScope::new().assign("post", post);
//! let record = scope.resolve("post").unwrap();
//!
//! assert!(record.is_new_record());
//! assert_eq!(record.errors().on("body"), vec!["can't be blank"]);
//! ```

mod column;
mod error;
mod field_errors;
mod record;
mod scope;
mod value;

pub use column::{humanize, Column, ColumnKind};
pub use error::{ModelError, Result};
pub use field_errors::{ErrorCollection, FieldErrors, BASE};
pub use record::{DynamicRecord, Record};
pub use scope::{RecordResolver, RecordScope};
pub use value::FieldValue;
