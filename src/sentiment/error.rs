//! Sentiment Error Taxonomy
//!
//! Failures that can escape the sentiment core. A missing artifact is not
//! listed here: it selects the fallback pipeline at startup instead of failing
//! requests. An empty review set is not an error either (see `aggregator`).

use thiserror::Error;

/// Boundary validation failures for direct sentiment requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Empty inputs cannot be analyzed.")]
    Blank,

    #[error("text must be between {min} and {max} characters, got {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Internal failure of a loaded artifact while vectorizing or predicting.
///
/// Signals a corrupted or incompatible artifact pair and is surfaced to the
/// caller rather than absorbed by the fallback path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("feature dimension mismatch: vectorizer produced {actual}, classifier expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("classifier produced a non-finite probability for class {class_index}")]
    NonFinite { class_index: usize },

    #[error("predicted class index {0} has no entry in the label map")]
    UnmappedClass(usize),

    #[error("classifier has no classes")]
    NoClasses,
}

/// Errors raised while loading the trained artifact blobs from disk.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("expected asset missing: {0}")]
    Missing(String),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to encode artifact: {0}")]
    Encode(#[source] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Umbrella error returned by the pipeline and the aggregator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Model inference failed: {0}")]
    Inference(#[from] InferenceError),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
