use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use clap::Parser;
use sentiment_conductor::config::{Cli, Command, ServeConfig};
use sentiment_conductor::movies::catalog::{InMemoryCatalog, SharedCatalog};
use sentiment_conductor::movies::handlers::{
    handle_get_movie, handle_get_reviews, handle_most_reviewed, handle_search, handle_top_rated,
};
use sentiment_conductor::sentiment::artifact::load_artifact;
use sentiment_conductor::sentiment::handlers::{handle_analyze, handle_health};
use sentiment_conductor::sentiment::lexicon::LexiconScorer;
use sentiment_conductor::sentiment::pipeline::SentimentPipeline;
use sentiment_conductor::training::trainer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    match cli.command {
        Command::Serve(config) => serve(config).await,
        Command::Train(config) => {
            let report = tokio::task::spawn_blocking(move || trainer::run(&config)).await??;
            tracing::info!(
                "Training finished: {} train rows, {} test rows, {} terms",
                report.train_rows,
                report.test_rows,
                report.vocabulary
            );
            Ok(())
        }
    }
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    tracing::info!("Starting sentiment service on {}", config.bind);

    // 1. Trained artifact (once, before accepting traffic):
    let load = load_artifact(
        &config.artifacts.model_path,
        &config.artifacts.vectorizer_path,
    );
    let status = load.status();
    let scorer = Arc::new(LexiconScorer::new());
    tracing::info!("Lexicon loaded with {} entries", scorer.len());

    let pipeline = Arc::new(SentimentPipeline::from_load(
        load,
        config.artifact_mode,
        scorer,
    )?);
    tracing::info!("Pipeline mode: {:?}", pipeline.mode());

    // 2. Movie catalog:
    let catalog: SharedCatalog = match &config.catalog {
        Some(path) => Arc::new(InMemoryCatalog::load_json(path)?),
        None => {
            tracing::warn!("No catalog configured; movie routes will return empty results");
            Arc::new(InMemoryCatalog::new())
        }
    };

    // 3. HTTP Router:
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/sentiment", post(handle_analyze))
        .route("/movies/search", get(handle_search))
        .route("/movies/top-rated", get(handle_top_rated))
        .route("/movies/most-reviewed", get(handle_most_reviewed))
        .route("/movies/:id", get(handle_get_movie))
        .route("/movies/:id/reviews", get(handle_get_reviews))
        .layer(Extension(pipeline))
        .layer(Extension(status))
        .layer(Extension(catalog))
        .layer(Extension(config.aggregation_policy()));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
