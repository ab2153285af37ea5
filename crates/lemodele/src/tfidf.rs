// TF-IDF vectorization
//
// *Le Vecteur* (The Vector) - Turn symptom text into weighted term vectors

use lesymptome::Tokenizer;
use std::collections::HashMap;

/// TF-IDF vectorizer over symptom descriptions
///
/// Vocabulary indices follow first appearance in the fitted corpus, so
/// feature layout is deterministic. IDF uses the smoothed form
/// `ln((1 + n) / (1 + df)) + 1` and transformed rows are L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Fit the vocabulary and IDF table on a corpus
    pub fn fit(&mut self, documents: &[String]) {
        self.n_documents = documents.len();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let mut seen = std::collections::HashSet::new();

            for token in self.tokenizer.tokenize(doc) {
                if !seen.insert(token.clone()) {
                    continue;
                }
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                let next_index = vocabulary.len();
                vocabulary.entry(token).or_insert(next_index);
            }
        }

        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[index] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Transform a document into an L2-normalized TF-IDF row
    ///
    /// Terms outside the fitted vocabulary are ignored; a document with
    /// no known terms transforms to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];

        for token in self.tokenizer.tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                row[index] += 1.0;
            }
        }

        for (index, value) in row.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }

        row
    }

    /// Fit on a corpus and transform every document in it
    pub fn fit_transform(&mut self, documents: &[String]) -> Vec<Vec<f64>> {
        self.fit(documents);
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Tokens of a document that appear in the fitted vocabulary
    pub fn known_terms(&self, document: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(document)
            .into_iter()
            .filter(|token| self.vocabulary.contains_key(token))
            .collect()
    }

    /// Size of the fitted vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents seen during fitting
    pub fn document_count(&self) -> usize {
        self.n_documents
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
