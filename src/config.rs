//! Command-line and environment configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::sentiment::aggregator::AggregationPolicy;
use crate::sentiment::types::MAX_TEXT_CHARS;

#[derive(Parser, Debug)]
#[command(name = "sentiment_conductor")]
#[command(about = "Movie discovery API with review sentiment analysis", long_about = None)]
pub struct Cli {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "SENTIMENT_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeConfig),
    /// Fit the vectorizer and classifier from a labelled CSV file
    Train(TrainConfig),
}

/// What to do when the trained artifact cannot be loaded at startup.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactMode {
    /// Refuse to start
    Strict,
    /// Run the lexicon-only fallback for the whole process lifetime
    #[default]
    Degraded,
}

#[derive(Args, Debug, Clone)]
pub struct ArtifactPaths {
    /// Serialized classifier blob
    #[arg(long, env = "SENTIMENT_MODEL_PATH", default_value = "naive_bayes_model.bin")]
    pub model_path: PathBuf,

    /// Serialized vectorizer blob
    #[arg(long, env = "SENTIMENT_VECTORIZER_PATH", default_value = "vectorizer.bin")]
    pub vectorizer_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "SENTIMENT_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub artifacts: ArtifactPaths,

    #[arg(long, value_enum, env = "SENTIMENT_ARTIFACT_MODE", default_value_t = ArtifactMode::Degraded)]
    pub artifact_mode: ArtifactMode,

    /// JSON file with the movie catalog
    #[arg(long, env = "SENTIMENT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Review text beyond this many characters is not analyzed
    #[arg(long, env = "SENTIMENT_MAX_REVIEW_CHARS", default_value_t = MAX_TEXT_CHARS)]
    pub max_review_chars: usize,

    /// Let the lexicon-only fallback produce movie sentiment scores
    #[arg(long, env = "SENTIMENT_FALLBACK_AGGREGATION")]
    pub fallback_aggregation: bool,
}

impl ServeConfig {
    pub fn aggregation_policy(&self) -> AggregationPolicy {
        AggregationPolicy {
            max_review_chars: self.max_review_chars,
            include_fallback: self.fallback_aggregation,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TrainConfig {
    /// Labelled CSV file
    #[arg(long)]
    pub data: PathBuf,

    #[command(flatten)]
    pub artifacts: ArtifactPaths,

    /// Column holding the text
    #[arg(long, default_value = "message to examine")]
    pub text_column: String,

    /// Column holding the class label
    #[arg(long, default_value = "label (depression result)")]
    pub label_column: String,

    /// Raw label value that means "positive"
    #[arg(long, default_value = "0")]
    pub positive_class: String,

    /// Laplace smoothing
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Fraction of rows held out for evaluation (0 disables)
    #[arg(long, default_value_t = 0.2)]
    pub test_ratio: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
