//! Sentiment Data Types
//!
//! Result shapes produced by the sentiment core and the DTOs exchanged with the
//! HTTP layer. JSON field names follow the public API (`isPositive`, `probability`).

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

pub const MIN_TEXT_CHARS: usize = 3;
pub const MAX_TEXT_CHARS: usize = 1000;

/// Binary decision of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn is_positive(self) -> bool {
        matches!(self, SentimentLabel::Positive)
    }

    pub fn from_positive(is_positive: bool) -> Self {
        if is_positive {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

/// One row of the label map: the raw class value seen at training time and
/// what it means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub raw: String,
    pub label: SentimentLabel,
}

/// Explicit class-index -> label table stored with the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMap {
    entries: Vec<LabelEntry>,
}

impl LabelMap {
    pub fn new(entries: Vec<LabelEntry>) -> Self {
        Self { entries }
    }

    /// The legacy binary convention: class 0 is positive, class 1 negative.
    pub fn positive_first() -> Self {
        Self::new(vec![
            LabelEntry {
                raw: "0".to_string(),
                label: SentimentLabel::Positive,
            },
            LabelEntry {
                raw: "1".to_string(),
                label: SentimentLabel::Negative,
            },
        ])
    }

    pub fn label_for(&self, class_index: usize) -> Option<SentimentLabel> {
        self.entries.get(class_index).map(|entry| entry.label)
    }

    pub fn index_of_raw(&self, raw: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.raw == raw)
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output of the trained classifier for a single text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub is_positive: bool,
    /// Probability mass of the predicted class, in [0, 1].
    pub confidence: f64,
}

/// Qualitative band of a polarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Magnitude {
    #[serde(rename = "Elation surge")]
    ElationSurge,
    #[serde(rename = "Warm resonance")]
    WarmResonance,
    #[serde(rename = "Balanced hush")]
    BalancedHush,
    #[serde(rename = "Cool twilight")]
    CoolTwilight,
    #[serde(rename = "Deep shadow")]
    DeepShadow,
}

/// Content pick derived from the classifier decision and the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Queue the Bliss Pulse carousel for luminous storytelling.")]
    LuminousStorytelling,
    #[serde(rename = "Slide into Velvet Serenade for textured slow-burns.")]
    SlowBurn,
    #[serde(rename = "Lean toward Neon Noir thrillers to mirror the intensity.")]
    IntenseThriller,
    #[serde(rename = "Try Pulse of the Universe to reset the vibe with awe-heavy sci-fi.")]
    ResetTheVibe,
}

/// Which pipeline variant produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    Full,
    Fallback,
}

/// Lexicon half of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityResult {
    pub polarity: f64,
    pub magnitude: Magnitude,
    pub recommendation: Recommendation,
}

/// Complete single-text response. Both pipeline variants produce this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub label: SentimentLabel,
    pub is_positive: bool,
    pub probability: f64,
    pub polarity: f64,
    pub magnitude: Magnitude,
    pub recommendation: Recommendation,
    pub mode: PipelineMode,
}

/// Movie-level score: round(100 * positive / considered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSentiment {
    pub score: u8,
    pub considered: usize,
    pub positive: usize,
}

/// A review as supplied by the movie catalog. Content may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ReviewRecord {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

impl SentimentRequest {
    /// Boundary check applied before the text reaches the core.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let actual = self.text.chars().count();
        if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&actual) {
            return Err(ValidationError::Length {
                min: MIN_TEXT_CHARS,
                max: MAX_TEXT_CHARS,
                actual,
            });
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::Blank);
        }
        Ok(&self.text)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub vectorizer_loaded: bool,
    pub mode: PipelineMode,
}
