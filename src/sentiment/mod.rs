//! Sentiment Module
//!
//! Decides whether text reads positive or negative, how strongly, and what to
//! watch next.
//!
//! ## Data Flow
//! - raw text -> `normalizer` -> `vectorizer` -> `classifier` -> (label, confidence)
//! - raw text -> `lexicon` -> polarity -> `tone` -> (magnitude, recommendation)
//!
//! `pipeline` combines both halves in either the full or the fallback variant
//! (fixed at startup). `aggregator` fans the pipeline out over a movie's reviews
//! and folds the decisions into a single score.
//!
//! ## Submodules
//! - **`artifact`**: Loading and wrapping the trained vectorizer/classifier pair.
//! - **`classifier`**: Multinomial Naive Bayes and the classifier capability trait.
//! - **`error`**: Validation, inference and artifact-load failures.
//! - **`vectorizer`**: Bag-of-words vectorizer and its capability trait.
//! - **`normalizer`**: Tokenize, filter, remove stop-words, stem.
//! - **`lexicon`**: Dictionary polarity scorer.
//! - **`tone`**: Polarity bands and recommendations.
//! - **`pipeline`**: Full / fallback variants.
//! - **`aggregator`**: Movie-level score from reviews.
//! - **`handlers`**: `/health` and `/api/sentiment`.
//! - **`types`**: Result shapes and DTOs.

pub mod aggregator;
pub mod artifact;
pub mod classifier;
pub mod error;
pub mod handlers;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod tone;
pub mod types;
pub mod vectorizer;
