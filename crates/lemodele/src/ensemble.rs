// Ensemble prediction
//
// *L'Ensemble* (The Ensemble) - Majority vote over three classifiers

use crate::bayes::MultinomialNb;
use crate::centroid::NearestCentroid;
use crate::classifier::{argmax, Classifier, Error};
use crate::dataset::TrainingSample;
use crate::knn::CosineKnn;
use crate::tfidf::TfidfVectorizer;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Conditions reported High regardless of confidence
const HIGH_SEVERITY_CONDITIONS: &[&str] = &["Heart Disease", "Tuberculosis"];

/// Triage severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Self-care territory
    Mild,

    /// Worth a consult
    Moderate,

    /// Needs prompt attention
    High,
}

impl Severity {
    /// Grade a single-model prediction
    ///
    /// Inherently severe conditions are High regardless of confidence;
    /// otherwise confidence above 90 is High, above 70 Moderate.
    pub fn for_condition(condition: &str, confidence_pct: f64) -> Self {
        if HIGH_SEVERITY_CONDITIONS.contains(&condition) || confidence_pct > 90.0 {
            Severity::High
        } else if confidence_pct > 70.0 {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }

    /// Grade an ensemble prediction from its confidence alone
    pub fn for_confidence(confidence_pct: f64) -> Self {
        if confidence_pct > 85.0 {
            Severity::High
        } else if confidence_pct > 70.0 {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "high" => Ok(Severity::High),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Training-time quality figures for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPerformance {
    /// Accuracy over the training corpus, percent
    pub accuracy: f64,

    /// When the model was fitted
    pub trained_at: String,
}

/// Single-model prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted condition label
    pub condition: String,

    /// Confidence percent (max class probability x 100)
    pub confidence: f64,

    /// Input terms the model was trained on (up to three)
    pub matched_terms: Vec<String>,

    /// Triage severity tier
    pub severity: Severity,
}

/// Ensemble prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsemblePrediction {
    /// Winning condition label
    pub condition: String,

    /// Mean of the individual model confidences, percent
    pub confidence: f64,

    /// Share of models that voted for the winner, percent
    pub agreement: f64,

    /// Per-model predicted labels
    pub individual_predictions: BTreeMap<String, String>,

    /// Per-model confidence percents
    pub individual_confidences: BTreeMap<String, f64>,

    /// Triage severity tier
    pub severity: Severity,
}

/// Ensemble of condition classifiers behind one fitted vectorizer
///
/// Construction trains everything, so a value of this type is always
/// ready to predict. Handlers share it behind an `Arc`.
pub struct EnsemblePredictor {
    vectorizer: TfidfVectorizer,
    conditions: Vec<String>,
    models: Vec<Box<dyn Classifier>>,
    performance: BTreeMap<String, ModelPerformance>,
    trained_at: String,
}

impl fmt::Debug for EnsemblePredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnsemblePredictor")
            .field("conditions", &self.conditions.len())
            .field("models", &self.models.iter().map(|m| m.name()).collect::<Vec<_>>())
            .field("vocabulary", &self.vectorizer.vocabulary_size())
            .field("trained_at", &self.trained_at)
            .finish()
    }
}

impl EnsemblePredictor {
    /// Train the vectorizer and all ensemble members on a corpus
    pub fn train(corpus: &[TrainingSample]) -> Result<Self, Error> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        // Label table in order of first appearance
        let mut conditions: Vec<String> = Vec::new();
        let mut labels: Vec<usize> = Vec::with_capacity(corpus.len());
        for sample in corpus {
            let index = conditions
                .iter()
                .position(|c| c == &sample.condition)
                .unwrap_or_else(|| {
                    conditions.push(sample.condition.clone());
                    conditions.len() - 1
                });
            labels.push(index);
        }

        let documents: Vec<String> = corpus.iter().map(|s| s.symptoms.clone()).collect();
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&documents);

        let mut models: Vec<Box<dyn Classifier>> = vec![
            Box::new(MultinomialNb::new()),
            Box::new(NearestCentroid::new()),
            Box::new(CosineKnn::new()),
        ];

        let trained_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let mut performance = BTreeMap::new();

        for model in &mut models {
            model.fit(&rows, &labels, conditions.len())?;

            let correct = rows
                .iter()
                .zip(&labels)
                .filter(|(row, &label)| model.predict(row).map_or(false, |p| p == label))
                .count();
            let accuracy = round2(correct as f64 / rows.len() as f64 * 100.0);

            info!(model = model.name(), accuracy, "model trained");
            performance.insert(
                model.name().to_string(),
                ModelPerformance {
                    accuracy,
                    trained_at: trained_at.clone(),
                },
            );
        }

        Ok(Self {
            vectorizer,
            conditions,
            models,
            performance,
            trained_at,
        })
    }

    /// Single-model prediction via the naive Bayes member
    pub fn predict(&self, symptoms: &str) -> Result<Prediction, Error> {
        let row = self.vectorize(symptoms)?;

        let model = self
            .models
            .iter()
            .find(|m| m.name() == "naive_bayes")
            .ok_or(Error::NotTrained)?;

        let proba = model.predict_proba(&row)?;
        let index = argmax(&proba).ok_or(Error::NotTrained)?;
        let condition = self.conditions[index].clone();
        let confidence = round1(proba[index] * 100.0);

        let mut matched_terms = self.vectorizer.known_terms(symptoms);
        matched_terms.truncate(3);

        let severity = Severity::for_condition(&condition, confidence);

        Ok(Prediction {
            condition,
            confidence,
            matched_terms,
            severity,
        })
    }

    /// Ensemble prediction: majority vote over all members
    pub fn ensemble_predict(&self, symptoms: &str) -> Result<EnsemblePrediction, Error> {
        let row = self.vectorize(symptoms)?;

        let mut votes: Vec<(usize, f64)> = Vec::with_capacity(self.models.len());
        let mut individual_predictions = BTreeMap::new();
        let mut individual_confidences = BTreeMap::new();

        for model in &self.models {
            let proba = model.predict_proba(&row)?;
            let index = argmax(&proba).ok_or(Error::NotTrained)?;
            let confidence = round1(proba[index] * 100.0);

            votes.push((index, confidence));
            individual_predictions
                .insert(model.name().to_string(), self.conditions[index].clone());
            individual_confidences.insert(model.name().to_string(), confidence);
        }

        let winner = majority_vote(&votes);
        let agreement = round1(
            votes.iter().filter(|(index, _)| *index == winner).count() as f64
                / votes.len() as f64
                * 100.0,
        );
        let confidence = round1(
            votes.iter().map(|(_, conf)| conf).sum::<f64>() / votes.len() as f64,
        );

        let condition = self.conditions[winner].clone();
        let severity = Severity::for_confidence(confidence);

        info!(%condition, confidence, agreement, "ensemble prediction");

        Ok(EnsemblePrediction {
            condition,
            confidence,
            agreement,
            individual_predictions,
            individual_confidences,
            severity,
        })
    }

    /// Per-model training performance
    pub fn performance(&self) -> &BTreeMap<String, ModelPerformance> {
        &self.performance
    }

    /// Names of the ensemble members
    pub fn model_names(&self) -> Vec<&'static str> {
        self.models.iter().map(|m| m.name()).collect()
    }

    /// Condition labels the ensemble can produce
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// When the ensemble was fitted
    pub fn trained_at(&self) -> &str {
        &self.trained_at
    }

    fn vectorize(&self, symptoms: &str) -> Result<Vec<f64>, Error> {
        let row = self.vectorizer.transform(symptoms);
        if row.iter().all(|&v| v == 0.0) {
            return Err(Error::UnrecognizedInput);
        }
        Ok(row)
    }
}

/// Majority vote with summed-confidence tie breaking
///
/// Votes are (class index, confidence percent) pairs. The winner is the
/// class with the most votes; equal vote counts fall back to the larger
/// summed confidence, which keeps the result independent of model order.
fn majority_vote(votes: &[(usize, f64)]) -> usize {
    let mut tally: BTreeMap<usize, (usize, f64)> = BTreeMap::new();
    for &(index, confidence) in votes {
        let entry = tally.entry(index).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += confidence;
    }

    tally
        .into_iter()
        .max_by(|a, b| {
            (a.1 .0)
                .cmp(&b.1 .0)
                .then(a.1 .1.partial_cmp(&b.1 .1).unwrap_or(std::cmp::Ordering::Equal))
        })
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::training_corpus;

    fn trained() -> EnsemblePredictor {
        EnsemblePredictor::train(&training_corpus()).expect("corpus trains")
    }

    #[test]
    fn test_train_empty_corpus_errors() {
        assert!(matches!(
            EnsemblePredictor::train(&[]),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn test_predict_training_row_label() {
        let predictor = trained();
        let prediction = predictor
            .predict("persistent cough weight loss night sweats")
            .unwrap();
        assert_eq!(prediction.condition, "Tuberculosis");
        // Inherently severe condition
        assert_eq!(prediction.severity, Severity::High);
    }

    #[test]
    fn test_predict_matched_terms_capped_at_three() {
        let predictor = trained();
        let prediction = predictor
            .predict("fever cough fatigue body aches chills")
            .unwrap();
        assert_eq!(prediction.matched_terms.len(), 3);
        assert_eq!(prediction.matched_terms[0], "fever");
    }

    #[test]
    fn test_predict_unrecognized_input_errors() {
        let predictor = trained();
        assert!(matches!(
            predictor.predict("quantum flux capacitor misalignment"),
            Err(Error::UnrecognizedInput)
        ));
    }

    #[test]
    fn test_predict_empty_input_errors() {
        let predictor = trained();
        assert!(predictor.predict("").is_err());
    }

    #[test]
    fn test_ensemble_predict_training_row_unanimous() {
        let predictor = trained();
        let prediction = predictor
            .ensemble_predict("severe headache nausea vomiting sensitivity light")
            .unwrap();
        assert_eq!(prediction.condition, "Migraine");
        assert_eq!(prediction.agreement, 100.0);
        assert_eq!(prediction.individual_predictions.len(), 3);
        assert_eq!(prediction.individual_confidences.len(), 3);
    }

    #[test]
    fn test_ensemble_confidence_is_mean_of_members() {
        let predictor = trained();
        let prediction = predictor
            .ensemble_predict("chest pain shortness of breath dizziness")
            .unwrap();
        let mean: f64 = prediction.individual_confidences.values().sum::<f64>()
            / prediction.individual_confidences.len() as f64;
        assert!((prediction.confidence - round1(mean)).abs() < 0.11);
    }

    #[test]
    fn test_performance_covers_all_models() {
        let predictor = trained();
        let performance = predictor.performance();
        assert_eq!(performance.len(), 3);
        for (name, perf) in performance {
            assert!(
                perf.accuracy >= 0.0 && perf.accuracy <= 100.0,
                "{} accuracy out of range",
                name
            );
            assert!(!perf.trained_at.is_empty());
        }
    }

    #[test]
    fn test_model_names() {
        let predictor = trained();
        let names = predictor.model_names();
        assert!(names.contains(&"naive_bayes"));
        assert!(names.contains(&"nearest_centroid"));
        assert!(names.contains(&"cosine_knn"));
    }

    #[test]
    fn test_conditions_cover_corpus_labels() {
        let predictor = trained();
        assert_eq!(predictor.conditions().len(), 14);
    }

    #[test]
    fn test_majority_vote_count_wins() {
        assert_eq!(majority_vote(&[(0, 30.0), (0, 20.0), (1, 99.0)]), 0);
    }

    #[test]
    fn test_majority_vote_tie_breaks_on_confidence() {
        assert_eq!(majority_vote(&[(0, 40.0), (1, 90.0)]), 1);
        assert_eq!(majority_vote(&[(2, 95.0), (1, 60.0)]), 2);
    }

    #[test]
    fn test_severity_grading() {
        assert_eq!(Severity::for_condition("Heart Disease", 10.0), Severity::High);
        assert_eq!(Severity::for_condition("Common Cold", 95.0), Severity::High);
        assert_eq!(Severity::for_condition("Common Cold", 80.0), Severity::Moderate);
        assert_eq!(Severity::for_condition("Common Cold", 50.0), Severity::Mild);

        assert_eq!(Severity::for_confidence(90.0), Severity::High);
        assert_eq!(Severity::for_confidence(75.0), Severity::Moderate);
        assert_eq!(Severity::for_confidence(50.0), Severity::Mild);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("mild".parse::<Severity>().unwrap(), Severity::Mild);
        assert_eq!("Moderate".parse::<Severity>().unwrap(), Severity::Moderate);
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert!("critical".parse::<Severity>().is_err());
    }
}
