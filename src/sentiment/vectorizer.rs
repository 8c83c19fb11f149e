//! Bag-of-words feature vectorizer.
//!
//! Maps normalized text onto a fixed vocabulary fitted offline. Terms are
//! extracted with the "two or more word characters" pattern, so single-letter
//! stems never become features.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid regex"));

/// Capability required from the vectorizer half of a trained artifact.
pub trait TextVectorizer: Send + Sync {
    /// Maps normalized text to a vector of length `dimension()`.
    /// Out-of-vocabulary terms contribute nothing.
    fn transform(&self, normalized: &str) -> Vec<f64>;

    fn dimension(&self) -> usize;
}

/// Count vectorizer with a sorted, deterministic vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountVectorizer {
    /// term -> column index
    vocabulary: HashMap<String, usize>,
    /// column index -> term
    terms: Vec<String>,
}

impl CountVectorizer {
    /// Builds the vocabulary from a corpus of normalized documents.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let unique: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| TERM.find_iter(doc.as_ref()).map(|m| m.as_str()))
            .collect();

        let terms: Vec<String> = unique.into_iter().map(str::to_string).collect();
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Self { vocabulary, terms }
    }

    pub fn from_terms(terms: Vec<String>) -> Self {
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self { vocabulary, terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

impl TextVectorizer for CountVectorizer {
    fn transform(&self, normalized: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.terms.len()];

        for term in TERM.find_iter(normalized) {
            if let Some(&idx) = self.vocabulary.get(term.as_str()) {
                vector[idx] += 1.0;
            }
        }

        vector
    }

    fn dimension(&self) -> usize {
        self.terms.len()
    }
}
