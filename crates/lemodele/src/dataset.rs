// Inline training corpus
//
// *Le Corpus* (The Corpus) - The toy symptom/condition dataset models train on

use serde::{Deserialize, Serialize};

/// A labeled symptom description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Free-text symptom description
    pub symptoms: String,

    /// Condition label
    pub condition: String,
}

impl TrainingSample {
    /// Create a sample from string slices
    pub fn new(symptoms: &str, condition: &str) -> Self {
        Self {
            symptoms: symptoms.to_string(),
            condition: condition.to_string(),
        }
    }
}

/// The inline demo corpus
///
/// Fifteen symptom descriptions over twelve conditions. Small enough to
/// train in microseconds at startup, varied enough that each classifier
/// has something to disagree about.
pub fn training_corpus() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new("fever headache cough fatigue", "Common Cold"),
        TrainingSample::new("chest pain shortness of breath dizziness", "Heart Disease"),
        TrainingSample::new("fever cough fatigue body aches chills", "Influenza"),
        TrainingSample::new("persistent cough weight loss night sweats", "Tuberculosis"),
        TrainingSample::new("high blood pressure headache dizziness", "Hypertension"),
        TrainingSample::new("frequent urination excessive thirst weight loss", "Diabetes"),
        TrainingSample::new("severe headache nausea vomiting sensitivity light", "Migraine"),
        TrainingSample::new("joint pain swelling stiffness morning", "Arthritis"),
        TrainingSample::new("stomach pain nausea diarrhea vomiting", "Gastroenteritis"),
        TrainingSample::new("skin rash itching redness swelling", "Allergic Reaction"),
        TrainingSample::new("sore throat fever swollen glands", "Strep Throat"),
        TrainingSample::new("runny nose sneezing congestion", "Common Cold"),
        TrainingSample::new("chest tightness wheezing cough", "Asthma"),
        TrainingSample::new("back pain muscle aches stiffness", "Muscle Strain"),
        TrainingSample::new("bloating abdominal pain gas", "Digestive Issues"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_size() {
        assert_eq!(training_corpus().len(), 15);
    }

    #[test]
    fn test_corpus_has_repeated_label() {
        let corpus = training_corpus();
        let cold_count = corpus
            .iter()
            .filter(|s| s.condition == "Common Cold")
            .count();
        assert_eq!(cold_count, 2);
    }

    #[test]
    fn test_corpus_rows_are_nonempty() {
        for sample in training_corpus() {
            assert!(!sample.symptoms.is_empty());
            assert!(!sample.condition.is_empty());
        }
    }
}
