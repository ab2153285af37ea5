// Patient risk scoring
//
// *La Strate* (The Stratum) - Age, symptom load, and history folded into one score

use lesymptome::extract_features;
use serde::{Deserialize, Serialize};

/// Chronic conditions recognized in a medical history
const CHRONIC_CONDITIONS: &[&str] = &[
    "diabetes",
    "hypertension",
    "heart disease",
    "asthma",
    "copd",
    "cancer",
    "kidney disease",
];

/// Chronic mentions beyond this add no further risk
const CHRONIC_FACTOR_CAP: usize = 3;

/// Patient fields the risk score is computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years
    pub age: u32,

    /// Free-text symptom description
    pub symptoms: String,

    /// Free-text medical history
    pub medical_history: String,

    /// Reported gender
    pub gender: String,
}

/// Risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Total risk at or below 4
    Low,

    /// Total risk above 4
    Moderate,

    /// Total risk above 7
    High,
}

/// Risk stratification result
///
/// Component factors are reported on a 0-100 scale; the raw components
/// (age/10 capped at 10, word count/5, capped chronic mentions) drive
/// the category thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Combined risk, 0-100
    pub overall_risk: f64,

    /// Age contribution, scaled
    pub age_factor: f64,

    /// Symptom load contribution, scaled
    pub symptom_complexity: f64,

    /// Chronic history contribution, scaled
    pub chronic_factor: f64,

    /// Risk tier
    pub risk_category: RiskCategory,
}

/// Score a patient profile
pub fn assess(profile: &PatientProfile) -> RiskAssessment {
    let age_risk = (profile.age as f64 / 10.0).min(10.0);
    let symptom_load = extract_features(&profile.symptoms).token_count as f64 / 5.0;
    let chronic = chronic_mentions(&profile.medical_history) as f64;

    let total = age_risk + symptom_load + chronic;

    let risk_category = if total > 7.0 {
        RiskCategory::High
    } else if total > 4.0 {
        RiskCategory::Moderate
    } else {
        RiskCategory::Low
    };

    RiskAssessment {
        overall_risk: round1((total * 10.0).min(100.0)),
        age_factor: round1(age_risk * 10.0),
        symptom_complexity: round1(symptom_load * 10.0),
        chronic_factor: round1(chronic * 10.0),
        risk_category,
    }
}

/// Count recognized chronic conditions in a history, capped
fn chronic_mentions(history: &str) -> usize {
    let history = history.to_lowercase();
    CHRONIC_CONDITIONS
        .iter()
        .filter(|condition| history.contains(*condition))
        .count()
        .min(CHRONIC_FACTOR_CAP)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, symptoms: &str, history: &str) -> PatientProfile {
        PatientProfile {
            age,
            symptoms: symptoms.to_string(),
            medical_history: history.to_string(),
            gender: "unknown".to_string(),
        }
    }

    #[test]
    fn test_young_patient_few_symptoms_is_low_risk() {
        let assessment = assess(&profile(30, "fever headache cough", ""));
        // age 3.0 + symptoms 0.6 = 3.6
        assert_eq!(assessment.risk_category, RiskCategory::Low);
        assert_eq!(assessment.overall_risk, 36.0);
        assert_eq!(assessment.age_factor, 30.0);
        assert_eq!(assessment.symptom_complexity, 6.0);
        assert_eq!(assessment.chronic_factor, 0.0);
    }

    #[test]
    fn test_senior_patient_is_higher_risk() {
        let assessment = assess(&profile(80, "chest pain and shortness of breath", ""));
        // age capped at 8.0 + symptoms 1.2 = 9.2
        assert_eq!(assessment.risk_category, RiskCategory::High);
    }

    #[test]
    fn test_age_factor_caps_at_100() {
        let assessment = assess(&profile(130, "", ""));
        assert_eq!(assessment.age_factor, 100.0);
    }

    #[test]
    fn test_chronic_history_raises_risk() {
        let without = assess(&profile(40, "fatigue", ""));
        let with = assess(&profile(40, "fatigue", "diabetes and hypertension"));
        assert!(with.overall_risk > without.overall_risk);
        assert_eq!(with.chronic_factor, 20.0);
    }

    #[test]
    fn test_chronic_factor_is_capped() {
        let assessment = assess(&profile(
            20,
            "",
            "diabetes hypertension asthma copd cancer",
        ));
        assert_eq!(assessment.chronic_factor, 30.0);
    }

    #[test]
    fn test_empty_history_matches_baseline_arithmetic() {
        // With no history the formula reduces to age + symptom load
        let assessment = assess(&profile(50, "one two three four five", ""));
        assert_eq!(assessment.overall_risk, 60.0);
        assert_eq!(assessment.risk_category, RiskCategory::Moderate);
    }

    #[test]
    fn test_overall_risk_caps_at_100() {
        let long_symptoms = "word ".repeat(60);
        let assessment = assess(&profile(90, &long_symptoms, "diabetes"));
        assert_eq!(assessment.overall_risk, 100.0);
    }
}
