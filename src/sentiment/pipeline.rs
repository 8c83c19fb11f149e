//! Sentiment Pipeline
//!
//! Two variants chosen once at startup and never switched:
//! - `Full`: trained classifier for the decision, lexicon for polarity.
//! - `Fallback`: lexicon only; the decision is the sign of the polarity and the
//!   confidence is the fixed [`FALLBACK_CONFIDENCE`].
//!
//! Both produce the same `SentimentReport` shape so callers never branch.

use std::sync::Arc;

use super::artifact::{ArtifactLoad, TrainedArtifact};
use super::error::{ArtifactError, Result};
use super::lexicon::PolarityScorer;
use super::tone::interpret;
use super::types::{Classification, PipelineMode, SentimentLabel, SentimentReport};
use crate::config::ArtifactMode;

/// Confidence reported when no trained classifier is available.
///
/// Not a measured probability. Consumers should read `mode: "fallback"` before
/// trusting it.
pub const FALLBACK_CONFIDENCE: f64 = 0.85;

#[derive(Clone)]
pub enum SentimentPipeline {
    Full {
        artifact: TrainedArtifact,
        scorer: Arc<dyn PolarityScorer>,
    },
    Fallback {
        scorer: Arc<dyn PolarityScorer>,
    },
}

impl SentimentPipeline {
    pub fn full(artifact: TrainedArtifact, scorer: Arc<dyn PolarityScorer>) -> Self {
        SentimentPipeline::Full { artifact, scorer }
    }

    pub fn fallback(scorer: Arc<dyn PolarityScorer>) -> Self {
        SentimentPipeline::Fallback { scorer }
    }

    /// Picks the variant from the startup load.
    ///
    /// Strict mode turns the first load failure into an error; degraded mode
    /// logs it and settles on the fallback variant for the process lifetime.
    pub fn from_load(
        load: ArtifactLoad,
        mode: ArtifactMode,
        scorer: Arc<dyn PolarityScorer>,
    ) -> std::result::Result<Self, ArtifactError> {
        let ArtifactLoad {
            artifact, errors, ..
        } = load;

        match (artifact, mode) {
            (Some(artifact), _) => {
                tracing::info!("Trained artifact loaded; running full pipeline");
                Ok(Self::full(artifact, scorer))
            }
            (None, ArtifactMode::Strict) => Err(errors
                .into_iter()
                .next()
                .unwrap_or_else(|| ArtifactError::Missing("trained artifact".to_string()))),
            (None, ArtifactMode::Degraded) => {
                for err in &errors {
                    tracing::warn!("Artifact unavailable: {}", err);
                }
                tracing::warn!(
                    "Running in fallback mode: lexicon polarity only, confidence fixed at {}",
                    FALLBACK_CONFIDENCE
                );
                Ok(Self::fallback(scorer))
            }
        }
    }

    pub fn mode(&self) -> PipelineMode {
        match self {
            SentimentPipeline::Full { .. } => PipelineMode::Full,
            SentimentPipeline::Fallback { .. } => PipelineMode::Fallback,
        }
    }

    fn scorer(&self) -> &dyn PolarityScorer {
        match self {
            SentimentPipeline::Full { scorer, .. } | SentimentPipeline::Fallback { scorer } => {
                scorer.as_ref()
            }
        }
    }

    pub fn polarity(&self, text: &str) -> f64 {
        self.scorer().score(text)
    }

    /// Positive/negative decision plus confidence.
    ///
    /// `polarity` is only consulted in fallback mode; pass it when it is
    /// already known to avoid scoring twice.
    fn decide(&self, text: &str, polarity: Option<f64>) -> Result<Classification> {
        match self {
            SentimentPipeline::Full { artifact, .. } => Ok(artifact.classify(text)?),
            SentimentPipeline::Fallback { scorer } => {
                let polarity = polarity.unwrap_or_else(|| scorer.score(text));
                let label = SentimentLabel::from_positive(polarity > 0.0);
                Ok(Classification {
                    label,
                    is_positive: label.is_positive(),
                    confidence: FALLBACK_CONFIDENCE,
                })
            }
        }
    }

    pub fn classify(&self, text: &str) -> Result<Classification> {
        self.decide(text, None)
    }

    pub fn is_positive(&self, text: &str) -> Result<bool> {
        Ok(self.classify(text)?.is_positive)
    }

    /// Full single-text analysis. Input is assumed validated.
    pub fn analyze(&self, text: &str) -> Result<SentimentReport> {
        let polarity = self.polarity(text);
        let classification = self.decide(text, Some(polarity))?;
        let tone = interpret(classification.is_positive, polarity);

        Ok(SentimentReport {
            label: classification.label,
            is_positive: classification.is_positive,
            probability: classification.confidence,
            polarity,
            magnitude: tone.magnitude,
            recommendation: tone.recommendation,
            mode: self.mode(),
        })
    }
}

impl std::fmt::Debug for SentimentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentPipeline::Full { artifact, .. } => {
                f.debug_struct("Full").field("artifact", artifact).finish()
            }
            SentimentPipeline::Fallback { .. } => f.debug_struct("Fallback").finish(),
        }
    }
}
