//! Review Aggregator
//!
//! Reduces per-review decisions into one movie-level score. Recomputed from the
//! review set on every call; nothing is accumulated between calls.
//!
//! Reviews fan out across the rayon pool. The reduction is a pair of counts,
//! so the order in which reviews finish does not matter.

use rayon::prelude::*;

use super::error::Result;
use super::pipeline::SentimentPipeline;
use super::types::{AggregatedSentiment, PipelineMode, ReviewRecord, MAX_TEXT_CHARS};

#[derive(Debug, Clone, Copy)]
pub struct AggregationPolicy {
    /// Review text beyond this many characters is ignored.
    pub max_review_chars: usize,
    /// Whether the fallback pipeline may produce a movie score.
    pub include_fallback: bool,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            max_review_chars: MAX_TEXT_CHARS,
            include_fallback: false,
        }
    }
}

/// Usable review text: non-blank, cut to `max_chars` on a char boundary.
pub fn bounded_content(review: &ReviewRecord, max_chars: usize) -> Option<&str> {
    let content = review.content.as_deref()?;
    if content.trim().is_empty() {
        return None;
    }
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            tracing::debug!(
                "Truncating review {:?} to {} characters",
                review.id,
                max_chars
            );
            Some(&content[..cut])
        }
        None => Some(content),
    }
}

/// Movie-level score over `reviews`.
///
/// `Ok(None)` means "no signal": no review had content, or the pipeline is in
/// fallback mode and the policy excludes it. An inference failure on any
/// review fails the whole aggregation.
pub fn aggregate(
    reviews: &[ReviewRecord],
    pipeline: &SentimentPipeline,
    policy: AggregationPolicy,
) -> Result<Option<AggregatedSentiment>> {
    if pipeline.mode() == PipelineMode::Fallback && !policy.include_fallback {
        tracing::debug!("Skipping aggregation of {} reviews in fallback mode", reviews.len());
        return Ok(None);
    }

    let (considered, positive) = reviews
        .par_iter()
        .filter_map(|review| bounded_content(review, policy.max_review_chars))
        .map(|text| {
            pipeline
                .is_positive(text)
                .map(|is_positive| (1usize, usize::from(is_positive)))
        })
        .try_reduce(|| (0, 0), |a, b| Ok((a.0 + b.0, a.1 + b.1)))?;

    if considered == 0 {
        return Ok(None);
    }

    let score = (100.0 * positive as f64 / considered as f64).round() as u8;
    tracing::debug!(
        "Aggregated {} of {} reviews as positive (score {})",
        positive,
        considered,
        score
    );

    Ok(Some(AggregatedSentiment {
        score,
        considered,
        positive,
    }))
}
