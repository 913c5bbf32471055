//! Error types for the record model.

use thiserror::Error;

use crate::column::ColumnKind;

/// Model-specific errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The record has no column with this name.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A raw value could not be converted for its column kind.
    #[error("invalid {kind} value for column {column}: {value:?}")]
    InvalidValue {
        column: String,
        kind: ColumnKind,
        value: String,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
