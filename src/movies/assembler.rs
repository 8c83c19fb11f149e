//! Movie record assembly.
//!
//! Joins a normalized catalog record with the review aggregation. The
//! aggregated score replaces the rating placeholder only when it is defined.

use rayon::prelude::*;

use super::normalize::normalize_movie;
use super::types::{Movie, RawMovie, ReviewView};
use crate::sentiment::aggregator::{aggregate, bounded_content, AggregationPolicy};
use crate::sentiment::error::Result;
use crate::sentiment::pipeline::SentimentPipeline;

const REVIEW_SOURCE: &str = "IMDb";

pub fn assemble_movie(
    raw: &RawMovie,
    pipeline: &SentimentPipeline,
    policy: AggregationPolicy,
) -> Result<Movie> {
    let mut movie = normalize_movie(raw, true);

    match aggregate(&raw.reviews, pipeline, policy)? {
        Some(aggregated) => {
            tracing::debug!(
                "Movie {}: sentiment {} from {} reviews (placeholder was {})",
                movie.id,
                aggregated.score,
                aggregated.considered,
                movie.sentiment_score
            );
            movie.sentiment_score = u32::from(aggregated.score);
        }
        None => {
            tracing::debug!("Movie {}: no review signal, keeping placeholder", movie.id);
        }
    }

    Ok(movie)
}

/// Per-review decisions, in catalog order. Reviews without content are skipped.
pub fn classify_reviews(
    raw: &RawMovie,
    pipeline: &SentimentPipeline,
    policy: AggregationPolicy,
) -> Result<Vec<ReviewView>> {
    raw.reviews
        .par_iter()
        .filter_map(|review| {
            bounded_content(review, policy.max_review_chars).map(|text| (review, text))
        })
        .map(|(review, text)| -> Result<ReviewView> {
            let classification = pipeline.classify(text)?;
            Ok(ReviewView {
                id: review.id.clone().unwrap_or_default(),
                author: review
                    .author
                    .clone()
                    .unwrap_or_else(|| "Anonymous".to_string()),
                source: REVIEW_SOURCE.to_string(),
                text: review.content.clone().unwrap_or_default(),
                sentiment: classification.label,
                confidence: classification.confidence,
                created_at: review.created_at.clone().unwrap_or_default(),
            })
        })
        .collect()
}
