//! Error types for the triage core and its callers.
//!
//! Validation failures are ordinary return values (`ValidationResult`).
//! `TriageError` is what `Result`-based callers (the request adapter,
//! record snapshotting) propagate with `?`.

use serde::Serialize;
use thiserror::Error;

/// Fields a triage request body must carry.
pub const REQUIRED_FIELDS: &[&str] = &["symptoms", "patient"];

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("{0}")]
    Invalid(String),

    #[error("At most {max} symptoms are allowed per consultation")]
    TooManySymptoms { max: usize },

    #[error("Consultation has not been classified")]
    NotClassified,

    #[error("Invalid request data")]
    MissingFields,

    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl TriageError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            TriageError::Invalid(_) => "VALIDATION_FAILED",
            TriageError::TooManySymptoms { .. } => "TOO_MANY_SYMPTOMS",
            TriageError::NotClassified => "NOT_CLASSIFIED",
            TriageError::MissingFields => "MISSING_FIELDS",
            TriageError::Malformed(_) => "MALFORMED",
            TriageError::InvalidEnum { .. } => "INVALID_ENUM",
        }
    }

    /// True when the caller sent bad input (a client error), false when the
    /// caller misused the core.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TriageError::NotClassified)
    }
}

/// Structured error body rendered by the transport layer.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<&'static str>>,
}

impl From<&TriageError> for ErrorBody {
    fn from(err: &TriageError) -> Self {
        let required_fields = match err {
            TriageError::MissingFields => Some(REQUIRED_FIELDS.to_vec()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code: err.code(),
            required_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_body_lists_required_fields() {
        let body = ErrorBody::from(&TriageError::MissingFields);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Invalid request data");
        assert_eq!(json["code"], "MISSING_FIELDS");
        assert_eq!(json["required_fields"], serde_json::json!(["symptoms", "patient"]));
    }

    #[test]
    fn invalid_body_carries_message_without_fields() {
        let err = TriageError::Invalid("At least one symptom is required".into());
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(json["error"], "At least one symptom is required");
        assert!(json.get("required_fields").is_none());
    }

    #[test]
    fn too_many_symptoms_message() {
        let err = TriageError::TooManySymptoms { max: 10 };
        assert_eq!(err.to_string(), "At most 10 symptoms are allowed per consultation");
        assert!(err.is_client_error());
    }

    #[test]
    fn not_classified_is_not_a_client_error() {
        assert!(!TriageError::NotClassified.is_client_error());
    }
}
