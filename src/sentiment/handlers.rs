use super::artifact::ArtifactStatus;
use super::error::{SentimentError, ValidationError};
use super::pipeline::SentimentPipeline;
use super::types::{ErrorResponse, HealthResponse, SentimentReport, SentimentRequest};

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps core errors to HTTP status codes.
///
/// Length violations follow request-schema semantics (422), blank text is a
/// plain bad request (400), inference failures are server errors (500).
pub fn error_response(err: &SentimentError) -> ApiError {
    let (status, detail) = match err {
        SentimentError::Validation(ValidationError::Blank) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        SentimentError::Validation(ValidationError::Length { .. }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        SentimentError::Inference(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Model inference failed.".to_string(),
        ),
    };
    (status, Json(ErrorResponse { detail }))
}

pub async fn handle_health(
    Extension(pipeline): Extension<Arc<SentimentPipeline>>,
    Extension(status): Extension<ArtifactStatus>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        model_loaded: status.model_loaded,
        vectorizer_loaded: status.vectorizer_loaded,
        mode: pipeline.mode(),
    })
}

pub async fn handle_analyze(
    Extension(pipeline): Extension<Arc<SentimentPipeline>>,
    Json(req): Json<SentimentRequest>,
) -> Result<Json<SentimentReport>, ApiError> {
    let text = req.validate().map_err(|err| {
        tracing::debug!("Rejected sentiment request: {}", err);
        error_response(&SentimentError::from(err))
    })?;

    match pipeline.analyze(text) {
        Ok(report) => {
            tracing::debug!(
                "Sentiment {:?} p={:.3} polarity={:.3} ({:?})",
                report.label,
                report.probability,
                report.polarity,
                report.mode
            );
            Ok(Json(report))
        }
        Err(err) => {
            tracing::error!("Sentiment analysis failed: {}", err);
            Err(error_response(&err))
        }
    }
}
