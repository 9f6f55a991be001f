//! Urgency classification.
//!
//! `UrgencyClassifier` is the seam where clinical logic plugs in. The only
//! implementation today, `SeverityAverage`, looks at symptom severities
//! alone. Patient age and preexisting conditions are deliberately ignored
//! until a weighted classifier replaces it.

use crate::models::TriageOutcome;
use crate::validation::ValidConsultation;

pub const STEP_MONITOR: &str = "Monitorear síntomas";
pub const STEP_REST: &str = "Mantener reposo";
pub const FALLBACK_RECOMMENDATION: &str = "Consultar con un médico";

/// Recommendation text for an urgency level, with a fallback for levels
/// outside 1-5.
pub fn recommendation_for(level: i32) -> &'static str {
    match level {
        1 => "Seguimiento en casa",
        2 => "Consulta médica en los próximos días",
        3 => "Consulta médica dentro de 24 horas",
        4 => "Atención urgente en centro médico",
        5 => "Llamar ambulancia / Acudir a emergencias",
        _ => FALLBACK_RECOMMENDATION,
    }
}

/// Fixed next steps; the last entry repeats the recommendation.
pub fn next_steps_for(recommendation: &str) -> Vec<String> {
    vec![
        STEP_MONITOR.to_string(),
        STEP_REST.to_string(),
        recommendation.to_string(),
    ]
}

/// Builds the full outcome for an urgency level.
pub fn outcome_for(level: i32) -> TriageOutcome {
    let recommendation = recommendation_for(level);
    TriageOutcome {
        urgency_level: level,
        recommendation: recommendation.to_string(),
        next_steps: next_steps_for(recommendation),
    }
}

/// Mean of `values` rounded half-up, in exact integer arithmetic.
///
/// Returns `None` for an empty slice. Values are expected to be positive
/// (severities), where `floor(mean + 0.5) == (2 * sum + n) / (2 * n)`.
pub fn round_half_up_mean(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as i64;
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    Some(((2 * sum + n) / (2 * n)) as i32)
}

pub trait UrgencyClassifier {
    fn classify(&self, consultation: &ValidConsultation<'_>) -> TriageOutcome;
}

/// Urgency = mean symptom severity, rounded half-up (2.5 → 3, 4.5 → 5).
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityAverage;

impl UrgencyClassifier for SeverityAverage {
    fn classify(&self, consultation: &ValidConsultation<'_>) -> TriageOutcome {
        let severities: Vec<i32> = consultation.severities().collect();
        // Validated consultations always carry at least one symptom.
        let level = round_half_up_mean(&severities).unwrap_or(0);
        outcome_for(level)
    }
}

/// Classifies with the default policy.
pub fn classify(consultation: &ValidConsultation<'_>) -> TriageOutcome {
    SeverityAverage.classify(consultation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Patient, Symptom, TriageConsultation};

    fn make_consultation(patient: Patient, severities: &[i32]) -> TriageConsultation {
        let symptoms = severities
            .iter()
            .enumerate()
            .map(|(i, &s)| Symptom::new(format!("Síntoma {i}"), s, "1 día"))
            .collect();
        TriageConsultation::new(patient, symptoms)
    }

    fn classify_severities(severities: &[i32]) -> TriageOutcome {
        let c = make_consultation(Patient::new(35, "M"), severities);
        classify(&ValidConsultation::new(&c).unwrap())
    }

    // ───────────────────────────────────────
    // Rounding
    // ───────────────────────────────────────

    #[test]
    fn half_values_round_up() {
        assert_eq!(round_half_up_mean(&[1, 2]), Some(2)); // 1.5
        assert_eq!(round_half_up_mean(&[2, 3]), Some(3)); // 2.5
        assert_eq!(round_half_up_mean(&[3, 4]), Some(4)); // 3.5
        assert_eq!(round_half_up_mean(&[4, 5]), Some(5)); // 4.5
    }

    #[test]
    fn non_half_values_round_to_nearest() {
        assert_eq!(round_half_up_mean(&[1, 1, 2]), Some(1)); // 1.33
        assert_eq!(round_half_up_mean(&[1, 2, 2]), Some(2)); // 1.67
        assert_eq!(round_half_up_mean(&[5, 5, 5, 4]), Some(5)); // 4.75
        assert_eq!(round_half_up_mean(&[3]), Some(3));
    }

    #[test]
    fn empty_mean_is_none() {
        assert_eq!(round_half_up_mean(&[]), None);
    }

    // ───────────────────────────────────────
    // Lookup table
    // ───────────────────────────────────────

    #[test]
    fn recommendation_table() {
        assert_eq!(recommendation_for(1), "Seguimiento en casa");
        assert_eq!(recommendation_for(2), "Consulta médica en los próximos días");
        assert_eq!(recommendation_for(3), "Consulta médica dentro de 24 horas");
        assert_eq!(recommendation_for(4), "Atención urgente en centro médico");
        assert_eq!(recommendation_for(5), "Llamar ambulancia / Acudir a emergencias");
    }

    #[test]
    fn recommendation_fallback_outside_table() {
        for level in [0, 6, -1, 42] {
            assert_eq!(recommendation_for(level), "Consultar con un médico");
        }
    }

    // ───────────────────────────────────────
    // Classification
    // ───────────────────────────────────────

    #[test]
    fn lowest_severities_give_home_monitoring() {
        let outcome = classify_severities(&[1, 1]);
        assert_eq!(outcome.urgency_level, 1);
        assert_eq!(outcome.recommendation, "Seguimiento en casa");
        assert_eq!(
            outcome.next_steps,
            vec!["Monitorear síntomas", "Mantener reposo", "Seguimiento en casa"]
        );
    }

    #[test]
    fn four_and_five_round_to_emergency() {
        let outcome = classify_severities(&[5, 4]);
        assert_eq!(outcome.urgency_level, 5);
        assert_eq!(outcome.recommendation, "Llamar ambulancia / Acudir a emergencias");
    }

    #[test]
    fn single_moderate_symptom() {
        let outcome = classify_severities(&[3]);
        assert_eq!(outcome.urgency_level, 3);
        assert_eq!(outcome.recommendation, "Consulta médica dentro de 24 horas");
    }

    #[test]
    fn two_and_three_round_to_three() {
        assert_eq!(classify_severities(&[2, 3]).urgency_level, 3);
    }

    #[test]
    fn last_next_step_is_the_recommendation() {
        for severities in [&[1][..], &[2, 2][..], &[4, 4, 3][..], &[5][..]] {
            let outcome = classify_severities(severities);
            assert_eq!(outcome.next_steps.len(), 3);
            assert_eq!(outcome.next_steps[2], outcome.recommendation);
        }
    }

    #[test]
    fn independent_of_order_and_patient() {
        let a = make_consultation(Patient::new(8, "F"), &[5, 1, 3, 2]);
        let mut b = make_consultation(Patient::new(80, "M"), &[2, 3, 1, 5]);
        b.patient.preexisting_conditions = vec!["Diabetes".into()];

        let oa = classify(&ValidConsultation::new(&a).unwrap());
        let ob = classify(&ValidConsultation::new(&b).unwrap());
        assert_eq!(oa, ob);
    }

    #[test]
    fn classification_is_deterministic() {
        let c = make_consultation(Patient::new(40, "F"), &[2, 4, 4]);
        let valid = ValidConsultation::new(&c).unwrap();
        assert_eq!(classify(&valid), classify(&valid));
    }

    #[test]
    fn custom_classifier_plugs_in() {
        struct AlwaysUrgent;
        impl UrgencyClassifier for AlwaysUrgent {
            fn classify(&self, _: &ValidConsultation<'_>) -> TriageOutcome {
                outcome_for(4)
            }
        }

        let c = make_consultation(Patient::new(40, "F"), &[1]);
        let outcome = AlwaysUrgent.classify(&ValidConsultation::new(&c).unwrap());
        assert_eq!(outcome.recommendation, "Atención urgente en centro médico");
    }
}
