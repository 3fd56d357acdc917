//! Error types for the engine.
//!
//! Per-value parse failures (a cell that is not numeric, a string that is not
//! a date) are never errors here; those values are simply excluded from the
//! interpretation being computed. Only structurally invalid calls reach this
//! module. Errors serialize as `{code, message}` so the embedding layer can
//! hand them to a frontend unchanged.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller requested an operation identifier the engine does not implement.
    /// Signaled fail-fast; silently routing to the wrong statistical method
    /// would corrupt results.
    #[error("Unknown agent operation '{0}'")]
    UnknownOperation(String),

    /// Dataset shape is structurally invalid (e.g. non-array rows payload).
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EngineError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Self::MalformedDataset(_) => "MALFORMED_DATASET",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for EngineError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("EngineError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            EngineError::UnknownOperation("pivot-table".to_string()).error_code(),
            "UNKNOWN_OPERATION"
        );
        assert_eq!(
            EngineError::InvalidConfig("bad threshold".to_string()).error_code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = EngineError::UnknownOperation("chart-recommender".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UNKNOWN_OPERATION"));
        assert!(json.contains("chart-recommender"));
    }

    #[test]
    fn test_with_context() {
        let error = EngineError::MalformedDataset("rows is not an array".to_string())
            .with_context("While dispatching detect-outliers");
        assert!(error.to_string().contains("While dispatching"));
        assert_eq!(error.error_code(), "MALFORMED_DATASET"); // Preserves original code
    }
}
