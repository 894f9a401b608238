//! Error types for clova-skill.

use thiserror::Error;

/// Boxed error returned by user handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all skill operations.
#[derive(Debug, Error)]
pub enum ClovaError {
    /// No handler registered for the request type.
    #[error("Unable to find requestHandler for '{0}'")]
    HandlerNotFound(String),

    /// A registered handler returned an error.
    #[error("requestHandler for '{request_type}' failed: {source}")]
    HandlerExecution {
        request_type: String,
        #[source]
        source: BoxError,
    },

    /// The inbound payload is not a usable CEK request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown speech language code.
    #[error("Unsupported speech language: '{0}'")]
    InvalidLanguage(String),
}

impl ClovaError {
    /// True for errors caused by the caller's payload rather than the skill.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ClovaError::InvalidRequest(_) | ClovaError::Json(_))
    }
}

/// Result type alias using ClovaError.
pub type Result<T> = std::result::Result<T, ClovaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_not_found_message() {
        let err = ClovaError::HandlerNotFound("IntentRequest".to_string());
        assert_eq!(
            err.to_string(),
            "Unable to find requestHandler for 'IntentRequest'"
        );
    }

    #[test]
    fn test_handler_execution_keeps_source() {
        let err = ClovaError::HandlerExecution {
            request_type: "LaunchRequest".to_string(),
            source: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "requestHandler for 'LaunchRequest' failed: boom"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ClovaError::InvalidRequest("x".into()).is_client_error());
        assert!(!ClovaError::HandlerNotFound("x".into()).is_client_error());
    }
}
