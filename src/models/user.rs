use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::consultation::TriageConsultation;
use crate::error::TriageError;

/// Long-term medical background of a user. Replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
}

/// Per-user settings. Fields missing from an update fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub language: String,
    pub notifications_enabled: bool,
    pub voice_enabled: bool,
    pub avatar_enabled: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            language: "es".into(),
            notifications_enabled: true,
            voice_enabled: true,
            avatar_enabled: true,
        }
    }
}

/// Snapshot of a finished consultation's outcome. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    date: NaiveDateTime,
    symptoms: Vec<String>,
    triage_level: i32,
    recommendation: String,
    notes: Option<String>,
}

impl ConsultationRecord {
    pub fn new(
        date: NaiveDateTime,
        symptoms: Vec<String>,
        triage_level: i32,
        recommendation: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            date,
            symptoms,
            triage_level,
            recommendation: recommendation.into(),
            notes,
        }
    }

    /// Captures the outcome of a classified consultation.
    pub fn from_consultation(
        consultation: &TriageConsultation,
        notes: Option<String>,
    ) -> Result<Self, TriageError> {
        let outcome = consultation.outcome().ok_or(TriageError::NotClassified)?;
        Ok(Self::new(
            consultation.timestamp(),
            consultation.symptom_descriptions(),
            outcome.urgency_level,
            outcome.recommendation.clone(),
            notes,
        ))
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn triage_level(&self) -> i32 {
        self.triage_level
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A registered user and everything accumulated about them.
///
/// `updated_at` moves forward on every mutation and never goes backwards,
/// even if the wall clock does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    medical_history: MedicalHistory,
    consultation_history: Vec<ConsultationRecord>,
    preferences: UserPreferences,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = super::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            gender: gender.into(),
            email: email.into(),
            medical_history: MedicalHistory::default(),
            consultation_history: Vec::new(),
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn medical_history(&self) -> &MedicalHistory {
        &self.medical_history
    }

    pub fn consultation_history(&self) -> &[ConsultationRecord] {
        &self.consultation_history
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Appends a record to the end of the consultation history.
    pub fn add_consultation(&mut self, record: ConsultationRecord) {
        self.consultation_history.push(record);
        self.touch();
        tracing::debug!(
            user_id = %self.id,
            history_len = self.consultation_history.len(),
            "Consultation appended"
        );
    }

    pub fn update_preferences(&mut self, preferences: UserPreferences) {
        self.preferences = preferences;
        self.touch();
    }

    pub fn update_medical_history(&mut self, medical_history: MedicalHistory) {
        self.medical_history = medical_history;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = super::now().max(self.updated_at);
    }
}
