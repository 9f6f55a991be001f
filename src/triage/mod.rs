//! Triage service: request in, classified consultation out.
//!
//! Stages, in order:
//! 1. Intake: parse the request body (`intake`)
//! 2. Symptom cap: reject requests over `TriageSettings::max_symptoms`
//! 3. Validation: patient, then symptoms (`crate::validation`)
//! 4. Classification: `UrgencyClassifier` produces a `TriageOutcome`
//! 5. Merge: the outcome is recorded on the consultation
//!
//! `finalize` then snapshots the outcome into a user's history.

pub mod classifier;
pub mod intake;
pub mod report;

pub use classifier::{classify, recommendation_for, SeverityAverage, UrgencyClassifier};
pub use intake::{parse_request, TriageRequest};
pub use report::{SymptomAnalysis, TriageReport};

use crate::config::TriageSettings;
use crate::error::TriageError;
use crate::models::{ConsultationRecord, TriageConsultation, User};
use crate::validation::ValidConsultation;

/// Runs the default classifier over a request.
pub fn assess(
    request: TriageRequest,
    settings: &TriageSettings,
) -> Result<TriageConsultation, TriageError> {
    assess_with(&SeverityAverage, request, settings)
}

pub fn assess_with<C>(
    classifier: &C,
    request: TriageRequest,
    settings: &TriageSettings,
) -> Result<TriageConsultation, TriageError>
where
    C: UrgencyClassifier + ?Sized,
{
    if request.symptoms.len() > settings.max_symptoms {
        tracing::warn!(
            count = request.symptoms.len(),
            max = settings.max_symptoms,
            "Triage rejected: too many symptoms"
        );
        return Err(TriageError::TooManySymptoms {
            max: settings.max_symptoms,
        });
    }

    let mut consultation = TriageConsultation::new(request.patient, request.symptoms);

    let outcome = {
        let valid = ValidConsultation::new(&consultation).map_err(|e| {
            tracing::warn!(reason = %e, "Triage rejected: validation failed");
            e
        })?;
        tracing::debug!(symptoms = consultation.symptoms.len(), "Consultation validated");
        classifier.classify(&valid)
    };

    tracing::info!(
        urgency_level = outcome.urgency_level,
        symptoms = consultation.symptoms.len(),
        "Consultation classified"
    );
    consultation.record_outcome(outcome);
    Ok(consultation)
}

/// Parse, assess and render a raw JSON request body.
pub fn handle_request(body: &str, settings: &TriageSettings) -> Result<TriageReport, TriageError> {
    let request = parse_request(body)?;
    let consultation = assess(request, settings)?;
    TriageReport::from_consultation(&consultation)
}

/// Appends the outcome of a classified consultation to a user's history.
pub fn finalize(
    user: &mut User,
    consultation: &TriageConsultation,
    notes: Option<String>,
) -> Result<(), TriageError> {
    let record = ConsultationRecord::from_consultation(consultation, notes)?;
    user.add_consultation(record);
    Ok(())
}
