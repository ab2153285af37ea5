// lemodele - Condition Prediction Models
//
// *Le Modele* (The Model) - TF-IDF vectorization, classifiers, and ensemble voting

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod dataset;
pub mod tfidf;
pub mod classifier;
pub mod bayes;
pub mod centroid;
pub mod knn;
pub mod ensemble;

pub use dataset::{training_corpus, TrainingSample};
pub use tfidf::TfidfVectorizer;
pub use classifier::{Classifier, Error};
pub use ensemble::{
    EnsemblePrediction, EnsemblePredictor, ModelPerformance, Prediction, Severity,
};

/// Model library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
