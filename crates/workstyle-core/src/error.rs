//! Error types for workstyle-core.

use thiserror::Error;

/// Top-level error type for workstyle-core.
///
/// Respondent-supplied data never produces these errors; they surface only
/// when reference data (catalog, relations, weight maps) fails integrity
/// validation at load time.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown personality type: {id}")]
    UnknownType { id: String },

    #[error("Duplicate personality type: {id}")]
    DuplicateType { id: String },

    #[error("Missing {framework} dimension: {label}")]
    MissingDimension {
        framework: &'static str,
        label: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
