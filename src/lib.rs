//! Sentiment Conductor Library
//!
//! Movie discovery API whose movie records carry a sentiment score computed
//! from their reviews. The binary (`main.rs`) wires these modules into an HTTP
//! service and an offline training command.
//!
//! ## Modules
//! - **`sentiment`**: Text normalization, Naive Bayes classification, lexicon
//!   polarity, tone interpretation, the full/fallback pipeline and review
//!   aggregation.
//! - **`movies`**: Catalog access, record normalization, title search and
//!   movie assembly with aggregated review sentiment.
//! - **`training`**: Batch job fitting the vectorizer and classifier from a
//!   labelled CSV file.
//! - **`config`**: Command-line and environment configuration.

pub mod config;
pub mod movies;
pub mod sentiment;
pub mod training;
