// Nearest-centroid classifier
//
// *Le Centre* (The Center) - Class prototypes compared by cosine similarity

use crate::classifier::{check_fit_inputs, cosine_similarity, softmax, Classifier, Error};

/// Softmax sharpening applied to similarity scores
///
/// Cosine similarities live in [-1, 1]; scaling before softmax keeps the
/// winning class from being flattened into the also-rans.
const SIMILARITY_SCALE: f64 = 5.0;

/// Nearest-centroid classifier
///
/// Each class is represented by the mean of its training rows. A row is
/// scored by cosine similarity against every centroid and probabilities
/// come from a scaled softmax over the similarities.
#[derive(Debug, Default)]
pub struct NearestCentroid {
    centroids: Vec<Vec<f64>>,
    n_features: usize,
}

impl NearestCentroid {
    /// Create an unfitted model
    pub fn new() -> Self {
        Self::default()
    }

    fn fitted(&self) -> bool {
        !self.centroids.is_empty()
    }
}

impl Classifier for NearestCentroid {
    fn name(&self) -> &'static str {
        "nearest_centroid"
    }

    fn fit(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
    ) -> Result<(), Error> {
        check_fit_inputs(rows, labels, n_classes)?;

        let n_features = rows[0].len();
        let mut sums = vec![vec![0.0; n_features]; n_classes];
        let mut counts = vec![0usize; n_classes];

        for (row, &label) in rows.iter().zip(labels) {
            counts[label] += 1;
            for (index, value) in row.iter().enumerate() {
                sums[label][index] += value;
            }
        }

        self.centroids = sums
            .into_iter()
            .zip(&counts)
            .map(|(sum, &count)| {
                let divisor = count.max(1) as f64;
                sum.into_iter().map(|v| v / divisor).collect()
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

        let scores: Vec<f64> = self
            .centroids
            .iter()
            .map(|centroid| SIMILARITY_SCALE * cosine_similarity(features, centroid))
            .collect();

        Ok(softmax(&scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_fit() -> NearestCentroid {
        let rows = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.1, 0.9],
        ];
        let labels = vec![0, 0, 1, 1];
        let mut model = NearestCentroid::new();
        model.fit(&rows, &labels, 2).unwrap();
        model
    }

    #[test]
    fn test_predict_nearest_class() {
        let model = toy_fit();
        assert_eq!(model.predict(&[1.0, 0.0, 0.0]).unwrap(), 0);
        assert_eq!(model.predict(&[0.0, 0.0, 1.0]).unwrap(), 1);
    }

    #[test]
    fn test_proba_sums_to_one() {
        let model = toy_fit();
        let proba = model.predict_proba(&[0.7, 0.1, 0.2]).unwrap();
        let sum: f64 = proba.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_centroid_match_is_confident() {
        let rows = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let labels = vec![0, 1];
        let mut model = NearestCentroid::new();
        model.fit(&rows, &labels, 2).unwrap();

        let proba = model.predict_proba(&[1.0, 0.0]).unwrap();
        assert!(proba[0] > 0.9);
    }

    #[test]
    fn test_predict_before_fit_errors() {
        let model = NearestCentroid::new();
        assert!(matches!(
            model.predict_proba(&[1.0]),
            Err(Error::NotTrained)
        ));
    }
}
