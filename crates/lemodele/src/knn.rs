// Cosine k-nearest-neighbors classifier
//
// *Le Voisin* (The Neighbor) - Similarity-weighted voting over training rows

use crate::classifier::{check_fit_inputs, cosine_similarity, Classifier, Error};

/// Default neighborhood size
const DEFAULT_K: usize = 3;

/// Cosine KNN classifier
///
/// Keeps the training rows and votes among the k most similar ones,
/// weighting each vote by its cosine similarity (negative similarities
/// contribute nothing). Probabilities are the normalized class weights.
#[derive(Debug)]
pub struct CosineKnn {
    k: usize,
    rows: Vec<Vec<f64>>,
    labels: Vec<usize>,
    n_classes: usize,
    n_features: usize,
}

impl CosineKnn {
    /// Create an unfitted model with the default neighborhood size
    pub fn new() -> Self {
        Self::with_k(DEFAULT_K)
    }

    /// Create an unfitted model with a custom neighborhood size
    pub fn with_k(k: usize) -> Self {
        Self {
            k: k.max(1),
            rows: Vec::new(),
            labels: Vec::new(),
            n_classes: 0,
            n_features: 0,
        }
    }

    fn fitted(&self) -> bool {
        !self.rows.is_empty()
    }
}

impl Default for CosineKnn {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for CosineKnn {
    fn name(&self) -> &'static str {
        "cosine_knn"
    }

    fn fit(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
    ) -> Result<(), Error> {
        check_fit_inputs(rows, labels, n_classes)?;

        self.rows = rows.to_vec();
        self.labels = labels.to_vec();
        self.n_classes = n_classes;
        self.n_features = rows[0].len();
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

        let mut neighbors: Vec<(usize, f64)> = self
            .rows
            .iter()
            .zip(&self.labels)
            .map(|(row, &label)| (label, cosine_similarity(features, row)))
            .collect();

        neighbors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut weights = vec![0.0; self.n_classes];
        for (label, similarity) in neighbors.into_iter().take(self.k) {
            weights[label] += similarity.max(0.0);
        }

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            // No neighbor carries any signal; fall back to uniform
            return Ok(vec![1.0 / self.n_classes as f64; self.n_classes]);
        }

        Ok(weights.into_iter().map(|w| w / total).collect())
    }
}
