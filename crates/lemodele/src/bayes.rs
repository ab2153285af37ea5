// Multinomial naive Bayes
//
// *Le Bayes* (The Bayes) - Laplace-smoothed multinomial model over TF-IDF rows

use crate::classifier::{check_fit_inputs, softmax, Classifier, Error};

/// Laplace smoothing constant
const ALPHA: f64 = 1.0;

/// Multinomial naive Bayes classifier
///
/// Treats TF-IDF weights as fractional term counts, which keeps the
/// multinomial likelihood well-defined since the rows are non-negative.
/// Probabilities come from the joint log-likelihoods via softmax, which
/// is the log-sum-exp normalization in disguise.
#[derive(Debug, Default)]
pub struct MultinomialNb {
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl MultinomialNb {
    /// Create an unfitted model
    pub fn new() -> Self {
        Self::default()
    }

    fn fitted(&self) -> bool {
        !self.class_log_prior.is_empty()
    }
}

impl Classifier for MultinomialNb {
    fn name(&self) -> &'static str {
        "naive_bayes"
    }

    fn fit(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
    ) -> Result<(), Error> {
        check_fit_inputs(rows, labels, n_classes)?;

        let n_features = rows[0].len();
        let mut class_counts = vec![0usize; n_classes];
        let mut feature_totals = vec![vec![0.0; n_features]; n_classes];

        for (row, &label) in rows.iter().zip(labels) {
            class_counts[label] += 1;
            for (index, value) in row.iter().enumerate() {
                feature_totals[label][index] += value;
            }
        }

        let n_samples = rows.len() as f64;
        self.class_log_prior = class_counts
            .iter()
            .map(|&count| ((count.max(1)) as f64 / n_samples).ln())
            .collect();

        self.feature_log_prob = feature_totals
            .iter()
            .map(|totals| {
                let class_total: f64 = totals.iter().sum();
                let denominator = class_total + ALPHA * n_features as f64;
                totals
                    .iter()
                    .map(|&t| ((t + ALPHA) / denominator).ln())
                    .collect()
            })
            .collect();

        self.n_features = n_features;
        Ok(())
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, Error> {
        if !self.fitted() {
            return Err(Error::NotTrained);
        }
        if features.len() != self.n_features {
            return Err(Error::DimensionMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let joint_log_likelihood: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + features
                        .iter()
                        .zip(log_probs)
                        .map(|(x, lp)| x * lp)
                        .sum::<f64>()
            })
            .collect();

        Ok(softmax(&joint_log_likelihood))
    }
}
