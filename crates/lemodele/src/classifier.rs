// Classifier trait and shared vector math
//
// *Le Classeur* (The Classifier) - The seam every ensemble member fits behind

/// Condition classifier over TF-IDF feature rows
///
/// Labels are dense class indices; the ensemble owns the index-to-name
/// table. Implementations must be deterministic for a fixed fit.
pub trait Classifier: Send + Sync {
    /// Short machine name, used as the key in performance maps
    fn name(&self) -> &'static str;

    /// Fit on feature rows and their class indices
    fn fit(&mut self, rows: &[Vec<f64>], labels: &[usize], n_classes: usize)
        -> Result<(), Error>;

    /// Class probability distribution for one feature row
    ///
    /// Returns one probability per class, summing to 1.
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, Error>;

    /// Most probable class index for one feature row
    fn predict(&self, features: &[f64]) -> Result<usize, Error> {
        let proba = self.predict_proba(features)?;
        argmax(&proba).ok_or(Error::NotTrained)
    }
}

/// Model errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fit was called with an empty corpus
    #[error("training corpus is empty")]
    EmptyCorpus,

    /// Rows and labels disagree in length, or a label is out of range
    #[error("inconsistent training data: {0}")]
    InconsistentTrainingData(String),

    /// Predict was called before fit
    #[error("model is not trained")]
    NotTrained,

    /// Feature row length does not match the fitted dimension
    #[error("feature dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Fitted feature dimension
        expected: usize,
        /// Dimension of the offending row
        got: usize,
    },

    /// Input text contained no terms any model was trained on
    #[error("no recognized symptom terms in input")]
    UnrecognizedInput,
}

/// Cosine similarity between two equal-length vectors
///
/// Returns 0.0 when either vector has zero magnitude.
pub(crate) fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Numerically stable softmax
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest value, None for an empty slice
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
}

/// Validate fit inputs shared by every classifier
pub(crate) fn check_fit_inputs(
    rows: &[Vec<f64>],
    labels: &[usize],
    n_classes: usize,
) -> Result<(), Error> {
    if rows.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    if rows.len() != labels.len() {
        return Err(Error::InconsistentTrainingData(format!(
            "{} rows but {} labels",
            rows.len(),
            labels.len()
        )));
    }
    if let Some(label) = labels.iter().find(|&&l| l >= n_classes) {
        return Err(Error::InconsistentTrainingData(format!(
            "label {} out of range for {} classes",
            label, n_classes
        )));
    }

    let dimension = rows[0].len();
    if let Some(row) = rows.iter().find(|r| r.len() != dimension) {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            got: row.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_large_scores_are_stable() {
        let probs = softmax(&[1000.0, 1001.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!(probs[1] > probs[0]);
    }

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_check_fit_inputs_rejects_empty() {
        assert!(matches!(
            check_fit_inputs(&[], &[], 2),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn test_check_fit_inputs_rejects_label_out_of_range() {
        let rows = vec![vec![1.0], vec![0.5]];
        assert!(check_fit_inputs(&rows, &[0, 5], 2).is_err());
    }

    #[test]
    fn test_check_fit_inputs_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![0.5]];
        assert!(matches!(
            check_fit_inputs(&rows, &[0, 1], 2),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
