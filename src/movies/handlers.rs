use super::assembler::{assemble_movie, classify_reviews};
use super::catalog::{SharedCatalog, DEFAULT_SEARCH_LIMIT};
use super::normalize::normalize_movie;
use super::types::{Movie, MovieRow, RawMovie, ReviewView, RowKind, SearchParams};
use crate::sentiment::aggregator::AggregationPolicy;
use crate::sentiment::handlers::{error_response, ApiError};
use crate::sentiment::pipeline::SentimentPipeline;
use crate::sentiment::types::ErrorResponse;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::cmp::Ordering;
use std::sync::Arc;

const ROW_SIZE: usize = 10;

fn not_found(movie_id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: format!("Movie {} not found", movie_id),
        }),
    )
}

/// Runs CPU-bound sentiment work off the async runtime.
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> crate::sentiment::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::error!("Review analysis failed: {}", err);
            Err(error_response(&err))
        }
        Err(err) => {
            tracing::error!("Review analysis task aborted: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Review analysis aborted.".to_string(),
                }),
            ))
        }
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<SharedCatalog>,
) -> Json<Vec<Movie>> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results: Vec<Movie> = catalog
        .search(&params.query, limit)
        .iter()
        .map(|raw| normalize_movie(raw, false))
        .collect();

    tracing::debug!("Search '{}' -> {} results", params.query, results.len());
    Json(results)
}

fn build_row(
    catalog: &SharedCatalog,
    kind: RowKind,
    title: &str,
    order: impl Fn(&RawMovie, &RawMovie) -> Ordering,
) -> MovieRow {
    let mut movies = catalog.all();
    movies.sort_by(|a, b| order(a, b));

    MovieRow {
        title: title.to_string(),
        kind,
        items: movies
            .iter()
            .take(ROW_SIZE)
            .map(|raw| normalize_movie(raw, false))
            .collect(),
    }
}

pub async fn handle_top_rated(Extension(catalog): Extension<SharedCatalog>) -> Json<MovieRow> {
    Json(build_row(&catalog, RowKind::TopRated, "Top Rated", |a, b| {
        let a = a.rating.unwrap_or(0.0);
        let b = b.rating.unwrap_or(0.0);
        b.total_cmp(&a)
    }))
}

pub async fn handle_most_reviewed(
    Extension(catalog): Extension<SharedCatalog>,
) -> Json<MovieRow> {
    Json(build_row(&catalog, RowKind::MostReviewed, "Most Reviewed", |a, b| {
        b.votes.unwrap_or(0).cmp(&a.votes.unwrap_or(0))
    }))
}

pub async fn handle_get_movie(
    Path(movie_id): Path<String>,
    Extension(catalog): Extension<SharedCatalog>,
    Extension(pipeline): Extension<Arc<SentimentPipeline>>,
    Extension(policy): Extension<AggregationPolicy>,
) -> Result<Json<Movie>, ApiError> {
    let raw = catalog.get(&movie_id).ok_or_else(|| not_found(&movie_id))?;

    let movie = run_blocking(move || assemble_movie(&raw, &pipeline, policy)).await?;
    Ok(Json(movie))
}

pub async fn handle_get_reviews(
    Path(movie_id): Path<String>,
    Extension(catalog): Extension<SharedCatalog>,
    Extension(pipeline): Extension<Arc<SentimentPipeline>>,
    Extension(policy): Extension<AggregationPolicy>,
) -> Result<Json<Vec<ReviewView>>, ApiError> {
    let raw = catalog.get(&movie_id).ok_or_else(|| not_found(&movie_id))?;

    let reviews = run_blocking(move || classify_reviews(&raw, &pipeline, policy)).await?;
    Ok(Json(reviews))
}
