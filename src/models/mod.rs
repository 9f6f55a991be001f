pub mod consultation;
pub mod enums;
pub mod patient;
pub mod symptom;
pub mod user;

pub use consultation::{TriageConsultation, TriageOutcome};
pub use enums::Gender;
pub use patient::Patient;
pub use symptom::Symptom;
pub use user::{ConsultationRecord, MedicalHistory, User, UserPreferences};

use chrono::{NaiveDateTime, Utc};

/// Current wall-clock time (UTC) used for every record timestamp.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
