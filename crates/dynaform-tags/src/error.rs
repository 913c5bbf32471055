//! Error types for tag building and URL generation.

use thiserror::Error;

/// Tag-builder and URL-generation errors.
#[derive(Debug, Error)]
pub enum TagError {
    /// No route is registered for the action.
    #[error("no route for action: {0}")]
    UnknownAction(String),

    /// A route needs a parameter that was not supplied.
    #[error("missing parameter {param} for action {action}")]
    MissingParam { action: String, param: String },

    /// Invalid path pattern.
    #[error("invalid path pattern: {0}")]
    InvalidPattern(String),

    /// Unsupported HTTP method name.
    #[error("unsupported form method: {0}")]
    InvalidMethod(String),

    /// Helper configuration could not be read.
    #[error("invalid tag configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Result type alias for tag operations.
pub type Result<T> = std::result::Result<T, TagError>;
