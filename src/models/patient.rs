use serde::{Deserialize, Serialize};

use super::enums::Gender;
use crate::error::TriageError;

/// Demographic and medical context for a triage request.
///
/// `gender` stays a raw string so that unexpected values reach validation
/// instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub age: i32,
    pub gender: String, // "M" or "F"
    pub preexisting_conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub medications: Option<Vec<String>>,
}

impl Patient {
    pub fn new(age: i32, gender: impl Into<String>) -> Self {
        Self {
            age,
            gender: gender.into(),
            preexisting_conditions: Vec::new(),
            allergies: None,
            medications: None,
        }
    }

    pub fn gender(&self) -> Result<Gender, TriageError> {
        self.gender.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_gender() {
        assert_eq!(Patient::new(35, "M").gender().unwrap(), Gender::Male);
        assert_eq!(Patient::new(35, "F").gender().unwrap(), Gender::Female);
    }

    #[test]
    fn unknown_gender_is_an_enum_error() {
        let err = Patient::new(35, "X").gender().unwrap_err();
        assert!(matches!(err, TriageError::InvalidEnum { .. }));
    }

    #[test]
    fn deserializes_request_shape() {
        let patient: Patient = serde_json::from_str(
            r#"{"age": 35, "gender": "M", "preexisting_conditions": ["Hipertensión"]}"#,
        )
        .unwrap();
        assert_eq!(patient.age, 35);
        assert_eq!(patient.preexisting_conditions, vec!["Hipertensión".to_string()]);
        assert!(patient.allergies.is_none());
    }

    #[test]
    fn conditions_must_be_a_list() {
        let result: Result<Patient, _> = serde_json::from_str(
            r#"{"age": 35, "gender": "M", "preexisting_conditions": "asma"}"#,
        );
        assert!(result.is_err());
    }
}
