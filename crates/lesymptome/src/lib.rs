// lesymptome - Symptom Text Analysis
//
// *Le Symptome* (The Symptom) - Tokenization and clinical feature extraction

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod tokenize;
pub mod features;

pub use tokenize::Tokenizer;
pub use features::{extract_features, CategoryLexicon, SymptomCategory, SymptomFeatures};

/// Symptom analysis library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
