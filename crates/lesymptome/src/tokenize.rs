// Symptom text tokenization
//
// *Le Jeton* (The Token) - Normalize free-text symptom descriptions into terms

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Word token pattern: two or more word characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// English stop words dropped during tokenization
///
/// Covers the function words that show up in free-text symptom
/// descriptions ("I have had a fever for three days").
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "been", "before", "being", "both", "but", "by", "can",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "had", "has", "have", "having", "he", "her", "here", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same",
    "she", "so", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "why", "will", "with", "you",
    "your",
];

/// Symptom text tokenizer
///
/// Lowercases, applies NFKC unicode normalization, extracts word tokens
/// of at least two characters, and drops English stop words. This is the
/// shared front end for the vectorizer and the category lexicon, so both
/// see the same term stream.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a tokenizer with the default English stop word list
    pub fn new() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenize a symptom description into normalized terms
    ///
    /// # Example
    ///
    /// ```
    /// let tokenizer = lesymptome::Tokenizer::new();
    /// let terms = tokenizer.tokenize("I have a severe Headache and nausea");
    /// assert_eq!(terms, vec!["severe", "headache", "nausea"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfkc().collect::<String>().to_lowercase();

        TOKEN_PATTERN
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect()
    }

    /// Number of stop words configured
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("fever headache cough");
        assert_eq!(tokens, vec!["fever", "headache", "cough"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("I have had a fever for the last few days");
        assert_eq!(tokens, vec!["fever", "last", "days"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Chest Pain and DIZZINESS");
        assert_eq!(tokens, vec!["chest", "pain", "dizziness"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars_and_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("x - fever, (cough)!");
        assert_eq!(tokens, vec!["fever", "cough"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_unicode_normalization() {
        let tokenizer = Tokenizer::new();
        // Fullwidth "ｆｅｖｅｒ" normalizes to "fever" under NFKC
        let tokens = tokenizer.tokenize("\u{ff46}\u{ff45}\u{ff56}\u{ff45}\u{ff52}");
        assert_eq!(tokens, vec!["fever"]);
    }
}
