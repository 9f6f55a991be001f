use chrono::NaiveDateTime;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::patient::Patient;
use super::symptom::Symptom;

/// Result of classifying a consultation.
///
/// The three fields always travel together: a consultation either has a
/// complete outcome or none at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageOutcome {
    pub urgency_level: i32, // 1-5
    pub recommendation: String,
    pub next_steps: Vec<String>,
}

/// One triage request: a patient plus the ordered symptoms they reported.
#[derive(Debug, Clone)]
pub struct TriageConsultation {
    pub patient: Patient,
    pub symptoms: Vec<Symptom>,
    timestamp: NaiveDateTime,
    outcome: Option<TriageOutcome>,
}

impl TriageConsultation {
    /// Creates an unclassified consultation stamped with the current time.
    pub fn new(patient: Patient, symptoms: Vec<Symptom>) -> Self {
        Self {
            patient,
            symptoms,
            timestamp: super::now(),
            outcome: None,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn outcome(&self) -> Option<&TriageOutcome> {
        self.outcome.as_ref()
    }

    pub fn urgency_level(&self) -> Option<i32> {
        self.outcome.as_ref().map(|o| o.urgency_level)
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.recommendation.as_str())
    }

    pub fn next_steps(&self) -> Option<&[String]> {
        self.outcome.as_ref().map(|o| o.next_steps.as_slice())
    }

    pub fn is_classified(&self) -> bool {
        self.outcome.is_some()
    }

    /// Merges a classification result into the consultation, replacing any
    /// earlier one.
    pub fn record_outcome(&mut self, outcome: TriageOutcome) {
        self.outcome = Some(outcome);
    }

    /// Descriptions of every symptom, in reported order.
    pub fn symptom_descriptions(&self) -> Vec<String> {
        self.symptoms.iter().map(|s| s.description.clone()).collect()
    }
}

impl Serialize for TriageConsultation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TriageConsultation", 6)?;
        state.serialize_field("patient", &self.patient)?;
        state.serialize_field("symptoms", &self.symptoms)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("urgency_level", &self.urgency_level())?;
        state.serialize_field("recommendation", &self.recommendation())?;
        state.serialize_field("next_steps", &self.next_steps())?;
        state.end()
    }
}
