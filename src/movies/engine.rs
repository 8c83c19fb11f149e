//! Title search.
//!
//! A small inverted index over title tokens. A movie's score is the number of
//! query tokens that hit its title.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static TITLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("Invalid regex"));

/// Distinct lowercase tokens of a title, for indexing.
pub fn tokenize_title(title: &str) -> HashSet<String> {
    TITLE_TOKEN
        .find_iter(&title.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercase query tokens in order. Duplicates are kept.
pub fn tokenize_query(query: &str) -> Vec<String> {
    TITLE_TOKEN
        .find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn index_title(index: &DashMap<String, Vec<String>>, movie_id: &str, title: &str) {
    for token in tokenize_title(title) {
        let mut ids = index.entry(token).or_default();
        if !ids.iter().any(|id| id == movie_id) {
            ids.push(movie_id.to_string());
        }
    }
}

/// Movie ids matching `query`, best first. Ties keep id order so results are stable.
pub fn rank(query: &str, index: &DashMap<String, Vec<String>>) -> Vec<(String, usize)> {
    let query_tokens = tokenize_query(query);

    let mut movie_scores: HashMap<String, usize> = HashMap::new();
    for token in query_tokens.iter() {
        if let Some(movie_ids) = index.get(token) {
            for movie_id in movie_ids.iter() {
                movie_scores
                    .entry(movie_id.clone())
                    .and_modify(|score| *score += 1)
                    .or_insert(1);
            }
        }
    }

    let mut results: Vec<(String, usize)> = movie_scores.into_iter().collect();
    results.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    results
}
