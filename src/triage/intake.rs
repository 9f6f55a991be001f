//! Request intake: turns a JSON request body into typed triage input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TriageError, REQUIRED_FIELDS};
use crate::models::{Patient, Symptom};

/// Body of a triage request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: Vec<Symptom>,
    pub patient: Patient,
}

/// Parses a raw JSON body. A blank body counts as missing fields.
pub fn parse_request(body: &str) -> Result<TriageRequest, TriageError> {
    if body.trim().is_empty() {
        tracing::warn!("Triage request rejected: empty body");
        return Err(TriageError::MissingFields);
    }
    let value: Value = serde_json::from_str(body)?;
    parse_value(value)
}

/// Checks the required top-level fields, then deserializes.
pub fn parse_value(value: Value) -> Result<TriageRequest, TriageError> {
    let has_required = value
        .as_object()
        .map(|obj| REQUIRED_FIELDS.iter().all(|field| obj.contains_key(*field)))
        .unwrap_or(false);
    if !has_required {
        tracing::warn!("Triage request rejected: missing required fields");
        return Err(TriageError::MissingFields);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "Triage request rejected: malformed fields");
        TriageError::from(e)
    })
}
