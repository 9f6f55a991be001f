use serde::{Deserialize, Serialize};

/// A single self-reported symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub description: String,
    pub severity: i32, // 1-5
    pub duration: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Symptom {
    pub fn new(description: impl Into<String>, severity: i32, duration: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            severity,
            duration: duration.into(),
            location: None,
            notes: None,
        }
    }
}
