//! Error types for form generation.

use dynaform_tags::TagError;
use thiserror::Error;

/// Form generation errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// No record is in scope under this name.
    #[error("unknown record: {0}")]
    UnknownRecord(String),

    /// The record has no content column with this name.
    #[error("record {record} has no column {column}")]
    UnknownColumn { record: String, column: String },

    /// Form options failed validation.
    #[error("invalid form options: {0}")]
    InvalidOptions(String),

    /// A tag builder or URL generator failed.
    #[error(transparent)]
    Helper(#[from] TagError),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
