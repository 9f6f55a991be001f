//! Response body for a classified consultation.

use serde::Serialize;

use crate::error::TriageError;
use crate::models::TriageConsultation;

pub const ANALYSIS_NOTE: &str = "Requiere evaluación profesional";

/// Per-symptom echo included in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomAnalysis {
    pub symptom: String,
    pub severity: i32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    pub urgency_level: i32,
    pub recommendation: String,
    pub symptoms_analysis: Vec<SymptomAnalysis>,
    pub next_steps: Vec<String>,
}

impl TriageReport {
    pub fn from_consultation(consultation: &TriageConsultation) -> Result<Self, TriageError> {
        let outcome = consultation.outcome().ok_or(TriageError::NotClassified)?;
        let symptoms_analysis = consultation
            .symptoms
            .iter()
            .map(|s| SymptomAnalysis {
                symptom: s.description.clone(),
                severity: s.severity,
                notes: ANALYSIS_NOTE.to_string(),
            })
            .collect();

        Ok(Self {
            urgency_level: outcome.urgency_level,
            recommendation: outcome.recommendation.clone(),
            symptoms_analysis,
            next_steps: outcome.next_steps.clone(),
        })
    }

    /// Single sentence handed to the speech synthesizer.
    pub fn spoken_summary(&self) -> String {
        format!(
            "Nivel de urgencia {}: {}. Próximos pasos: {}.",
            self.urgency_level,
            self.recommendation,
            self.next_steps.join(", ")
        )
    }
}
