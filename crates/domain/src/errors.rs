//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ClassCal
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ClassCalError {
    /// The text source could not produce text for the requested path.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Missing or invalid configuration, including weekdays without an anchor
    /// date.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A time-slot string did not match the expected `hh:mm am|pm` shape.
    #[error("Time parse error: {0}")]
    TimeParse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The calendar accepted the request but the response was unusable.
    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ClassCal operations
pub type Result<T> = std::result::Result<T, ClassCalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = ClassCalError::Config("no anchor for FRIDAY".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "no anchor for FRIDAY");
    }

    #[test]
    fn display_includes_category() {
        let err = ClassCalError::Extraction("file not found".into());
        assert_eq!(err.to_string(), "Extraction error: file not found");
    }
}
