//! Error types for workstyle-engine.
//!
//! Analysis itself never fails on respondent data; every degenerate input
//! resolves to a defined default output. These errors surface only while
//! constructing an engine from invalid configuration or reference data.

use thiserror::Error;
use workstyle_core::CoreError;

/// Top-level error type for workstyle-engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Reference data error: {0}")]
    ReferenceError(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::ReferenceError(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = EngineError::ConfigError("event_dampening out of range".into());
        assert!(err.to_string().contains("event_dampening"));
    }
}
