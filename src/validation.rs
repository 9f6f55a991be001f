//! Validation rules for triage inputs and user records.
//!
//! Each validator is a pure function over the value it checks and returns
//! a [`ValidationResult`]. Rules are checked in order and the first failure
//! wins. Aggregate validators call the leaf validators and prefix their
//! message with the entity that failed.

use serde::Serialize;

use crate::error::TriageError;
use crate::models::{Gender, Patient, Symptom, TriageConsultation, User};

pub const MIN_SEVERITY: i32 = 1;
pub const MAX_SEVERITY: i32 = 5;
pub const MIN_URGENCY: i32 = 1;
pub const MAX_URGENCY: i32 = 5;

/// Outcome of a validation check: a flag plus a user-facing message
/// (empty when valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn into_result(self) -> Result<(), TriageError> {
        if self.valid {
            Ok(())
        } else {
            Err(TriageError::Invalid(self.message))
        }
    }
}

fn is_valid_gender(gender: &str) -> bool {
    gender.parse::<Gender>().is_ok()
}

pub fn validate_symptom(symptom: &Symptom) -> ValidationResult {
    if symptom.description.is_empty() {
        return ValidationResult::fail("Symptom description is required");
    }
    if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&symptom.severity) {
        return ValidationResult::fail("Severity must be an integer between 1 and 5");
    }
    if symptom.duration.is_empty() {
        return ValidationResult::fail("Duration is required");
    }
    ValidationResult::ok()
}

/// `preexisting_conditions` is a `Vec` by construction, so the list-shape
/// rule is enforced when the request is deserialized.
pub fn validate_patient(patient: &Patient) -> ValidationResult {
    if patient.age < 0 {
        return ValidationResult::fail("Invalid age");
    }
    if !is_valid_gender(&patient.gender) {
        return ValidationResult::fail("Gender must be 'M' or 'F'");
    }
    ValidationResult::ok()
}

pub fn validate_consultation(consultation: &TriageConsultation) -> ValidationResult {
    let patient = validate_patient(&consultation.patient);
    if !patient.valid {
        return ValidationResult::fail(format!("Invalid patient data: {}", patient.message));
    }

    if consultation.symptoms.is_empty() {
        return ValidationResult::fail("At least one symptom is required");
    }

    for symptom in &consultation.symptoms {
        let result = validate_symptom(symptom);
        if !result.valid {
            return ValidationResult::fail(format!("Invalid symptom data: {}", result.message));
        }
    }

    if let Some(level) = consultation.urgency_level() {
        if !(MIN_URGENCY..=MAX_URGENCY).contains(&level) {
            return ValidationResult::fail("Urgency level must be an integer between 1 and 5");
        }
    }

    ValidationResult::ok()
}

pub fn validate_user(user: &User) -> ValidationResult {
    if user.name.is_empty() {
        return ValidationResult::fail("Name is required");
    }
    if user.age < 0 {
        return ValidationResult::fail("Invalid age");
    }
    if !is_valid_gender(&user.gender) {
        return ValidationResult::fail("Gender must be 'M' or 'F'");
    }
    if user.email.is_empty() || !user.email.contains('@') {
        return ValidationResult::fail("Valid email is required");
    }
    ValidationResult::ok()
}

/// A consultation that has passed [`validate_consultation`].
///
/// Only obtainable through [`ValidConsultation::new`], so classifiers taking
/// one never see an empty symptom list or out-of-range severities.
#[derive(Debug, Clone, Copy)]
pub struct ValidConsultation<'a> {
    inner: &'a TriageConsultation,
}

impl<'a> ValidConsultation<'a> {
    pub fn new(consultation: &'a TriageConsultation) -> Result<Self, TriageError> {
        validate_consultation(consultation).into_result()?;
        Ok(Self {
            inner: consultation,
        })
    }

    pub fn consultation(&self) -> &'a TriageConsultation {
        self.inner
    }

    pub fn severities(&self) -> impl Iterator<Item = i32> + 'a {
        let inner = self.inner;
        inner.symptoms.iter().map(|s| s.severity)
    }
}
