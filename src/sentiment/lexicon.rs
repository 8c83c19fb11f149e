//! Lexicon polarity scorer.
//!
//! Scores raw prose against an embedded word list. Modifiers ("very",
//! "slightly") scale the next sentiment word; negations ("not", "never",
//! "n't") flip and dampen it by -0.5 for a few tokens. The result is the mean
//! of all assessments clamped to [-1, 1], or 0.0 when no word matched.
//!
//! Independent of the trained artifact: no training, no shared state.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Capability the pipeline needs from a polarity source.
pub trait PolarityScorer: Send + Sync {
    /// Signed valence in [-1, 1]. Must be deterministic.
    fn score(&self, text: &str) -> f64;
}

const NEGATION_FACTOR: f64 = -0.5;
/// Tokens a negation stays armed for when no sentiment word follows.
const NEGATION_WINDOW: usize = 3;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "hardly", "without", "cannot",
];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("truly", 1.3),
    ("so", 1.2),
    ("super", 1.4),
    ("totally", 1.4),
    ("highly", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("rather", 0.9),
    ("fairly", 0.9),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("mildly", 0.7),
];

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}']+").expect("Invalid regex"));

static DEFAULT_ENTRIES: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    const LEXICON_FILE: &str = include_str!("../../resources/lexicon/en.tsv");
    parse_lexicon(LEXICON_FILE)
});

/// Parses `word<TAB>polarity` lines; '#' comments and malformed lines are skipped.
pub fn parse_lexicon(source: &str) -> HashMap<String, f64> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let word = fields.next()?.trim();
            let polarity: f64 = fields.next()?.trim().parse().ok()?;
            Some((word.to_lowercase(), polarity.clamp(-1.0, 1.0)))
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    entries: HashMap<String, f64>,
    modifiers: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    /// Scorer over the embedded English lexicon.
    pub fn new() -> Self {
        Self::with_entries(DEFAULT_ENTRIES.clone())
    }

    pub fn with_entries(entries: HashMap<String, f64>) -> Self {
        Self {
            entries,
            modifiers: MODIFIERS.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn polarity_of(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }

    fn assessments(&self, text: &str) -> Vec<f64> {
        let lowered = text.to_lowercase();
        let mut assessments = Vec::new();
        let mut multiplier = 1.0;
        let mut negation_left = 0usize;

        for token in TOKEN.find_iter(&lowered).map(|m| m.as_str().trim_matches('\'')) {
            if token.is_empty() {
                continue;
            }
            if Self::is_negation(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(&factor) = self.modifiers.get(token) {
                multiplier *= factor;
                continue;
            }
            if let Some(&polarity) = self.entries.get(token) {
                let mut value = polarity * multiplier;
                if negation_left > 0 {
                    value *= NEGATION_FACTOR;
                }
                assessments.push(value.clamp(-1.0, 1.0));
                multiplier = 1.0;
                negation_left = 0;
                continue;
            }

            multiplier = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }

        assessments
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
