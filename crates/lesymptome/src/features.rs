// Clinical feature extraction
//
// *Le Signe* (The Sign) - Map symptom text onto clinical domains and signals

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Words that indicate the patient is describing severity
const SEVERITY_INDICATORS: &[&str] = &["severe", "intense", "extreme"];

/// Words that indicate the patient mentioned a duration
const DURATION_MARKERS: &[&str] = &["days", "weeks", "months"];

/// Clinical domain of a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    /// Airways and breathing
    Respiratory,

    /// Brain and nervous system
    Neurological,

    /// Digestive tract
    Gastrointestinal,

    /// Heart and circulation
    Cardiovascular,

    /// Systemic, non-localized complaints
    General,
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Gastrointestinal => "gastrointestinal",
            SymptomCategory::Cardiovascular => "cardiovascular",
            SymptomCategory::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// Fixed phrase lists mapping symptom mentions to clinical domains
#[derive(Debug, Clone)]
pub struct CategoryLexicon {
    entries: Vec<(SymptomCategory, &'static [&'static str])>,
}

impl CategoryLexicon {
    /// Create the default lexicon
    pub fn new() -> Self {
        Self {
            entries: vec![
                (
                    SymptomCategory::Respiratory,
                    &["cough", "shortness of breath", "chest pain", "wheezing"],
                ),
                (
                    SymptomCategory::Neurological,
                    &["headache", "dizziness", "confusion", "seizure"],
                ),
                (
                    SymptomCategory::Gastrointestinal,
                    &["nausea", "vomiting", "diarrhea", "abdominal pain"],
                ),
                (
                    SymptomCategory::Cardiovascular,
                    &["chest pain", "palpitations", "edema", "syncope"],
                ),
                (
                    SymptomCategory::General,
                    &["fever", "fatigue", "weight loss", "malaise"],
                ),
            ],
        }
    }

    /// Count category phrase mentions in a symptom description
    ///
    /// Phrases are matched as substrings of the lowercased text, so
    /// "shortness of breath" matches as a unit. Categories with no
    /// matches are omitted from the result.
    pub fn categorize(&self, text: &str) -> BTreeMap<SymptomCategory, usize> {
        let text = text.to_lowercase();
        let mut counts = BTreeMap::new();

        for (category, phrases) in &self.entries {
            let count = phrases.iter().filter(|p| text.contains(*p)).count();
            if count > 0 {
                counts.insert(*category, count);
            }
        }

        counts
    }
}

impl Default for CategoryLexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Signals extracted from a symptom description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomFeatures {
    /// Number of whitespace-separated words
    pub token_count: usize,

    /// Count of severity words ("severe", "intense", "extreme")
    pub severity_indicators: usize,

    /// Whether the patient mentioned a duration
    pub duration_mentioned: bool,

    /// Mention counts per clinical domain
    pub categories: BTreeMap<SymptomCategory, usize>,
}

/// Extract clinical features from a symptom description
pub fn extract_features(text: &str) -> SymptomFeatures {
    let lower = text.to_lowercase();

    SymptomFeatures {
        token_count: text.split_whitespace().count(),
        severity_indicators: SEVERITY_INDICATORS
            .iter()
            .filter(|word| lower.contains(*word))
            .count(),
        duration_mentioned: DURATION_MARKERS.iter().any(|word| lower.contains(*word)),
        categories: CategoryLexicon::new().categorize(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_single_domain() {
        let lexicon = CategoryLexicon::new();
        let counts = lexicon.categorize("persistent cough and wheezing");
        assert_eq!(counts.get(&SymptomCategory::Respiratory), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_categorize_phrase_spans_words() {
        let lexicon = CategoryLexicon::new();
        let counts = lexicon.categorize("shortness of breath at night");
        assert_eq!(counts.get(&SymptomCategory::Respiratory), Some(&1));
    }

    #[test]
    fn test_categorize_chest_pain_is_respiratory_and_cardiovascular() {
        let lexicon = CategoryLexicon::new();
        let counts = lexicon.categorize("chest pain");
        assert_eq!(counts.get(&SymptomCategory::Respiratory), Some(&1));
        assert_eq!(counts.get(&SymptomCategory::Cardiovascular), Some(&1));
    }

    #[test]
    fn test_categorize_no_matches_is_empty() {
        let lexicon = CategoryLexicon::new();
        assert!(lexicon.categorize("stubbed my toe").is_empty());
    }

    #[test]
    fn test_extract_features() {
        let features = extract_features("severe headache and nausea for three days");
        assert_eq!(features.token_count, 7);
        assert_eq!(features.severity_indicators, 1);
        assert!(features.duration_mentioned);
        assert_eq!(
            features.categories.get(&SymptomCategory::Neurological),
            Some(&1)
        );
        assert_eq!(
            features.categories.get(&SymptomCategory::Gastrointestinal),
            Some(&1)
        );
    }

    #[test]
    fn test_extract_features_empty_input() {
        let features = extract_features("");
        assert_eq!(features.token_count, 0);
        assert_eq!(features.severity_indicators, 0);
        assert!(!features.duration_mentioned);
        assert!(features.categories.is_empty());
    }
}
