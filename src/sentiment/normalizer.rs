//! Text Normalizer
//!
//! Turns raw text into the space-joined stemmed form the vectorizer was fitted on:
//! 1. Lowercase
//! 2. Split into word tokens (apostrophes split clitics: "movie's" -> "movie", "s")
//! 3. Keep purely alphabetic tokens
//! 4. Drop English stop-words
//! 5. Snowball (Porter2) stemming

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Invalid regex"));

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// English stop-word list, loaded at compile time.
static ENGLISH_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    const STOPWORDS_FILE: &str = include_str!("../../resources/stopwords/en.txt");

    STOPWORDS_FILE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

pub fn is_stopword(word: &str) -> bool {
    ENGLISH_STOPWORDS.contains(word)
}

/// Normalized tokens in input order. Duplicates are kept since the
/// vectorizer counts occurrences.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !is_stopword(token))
        .map(|token| STEMMER.stem(token).into_owned())
        .collect()
}

/// Space-joined normalized form. An empty string is a valid result.
pub fn normalize(text: &str) -> String {
    normalized_tokens(text).join(" ")
}
