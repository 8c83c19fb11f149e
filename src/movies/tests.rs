//! Movies Module Tests
//!
//! ## Test Scopes
//! - **Normalization**: defaults for sparse catalog records.
//! - **Search**: title tokenization, ranking, kind filtering.
//! - **Catalog**: JSON loading and review id assignment.
//! - **Assembly**: aggregated score vs. rating placeholder, per-review output.
//! - **Handlers**: rows, lookups and 404s.

#[cfg(test)]
mod tests {
    use crate::movies::assembler::{assemble_movie, classify_reviews};
    use crate::movies::catalog::{InMemoryCatalog, MovieCatalog, SharedCatalog};
    use crate::movies::engine::{index_title, rank, tokenize_query, tokenize_title};
    use crate::movies::handlers::{
        handle_get_movie, handle_get_reviews, handle_most_reviewed, handle_search,
        handle_top_rated,
    };
    use crate::movies::normalize::{
        normalize_movie, placeholder_sentiment, DEFAULT_GENRE, DEFAULT_YEAR, NO_SYNOPSIS,
        PLACEHOLDER_POSTER, UNKNOWN_TITLE,
    };
    use crate::movies::types::{RawMovie, RawPerson, RowKind, SearchParams};
    use crate::sentiment::aggregator::AggregationPolicy;
    use crate::sentiment::lexicon::LexiconScorer;
    use crate::sentiment::pipeline::{SentimentPipeline, FALLBACK_CONFIDENCE};
    use crate::sentiment::types::{ReviewRecord, SentimentLabel};

    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use dashmap::DashMap;
    use std::sync::Arc;

    // ============================================================
    // FIXTURES
    // ============================================================

    fn movie(id: &str, title: &str) -> RawMovie {
        RawMovie {
            id: id.to_string(),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn rated(id: &str, title: &str, rating: f64, votes: u64) -> RawMovie {
        RawMovie {
            rating: Some(rating),
            votes: Some(votes),
            ..movie(id, title)
        }
    }

    fn with_reviews(mut raw: RawMovie, contents: &[&str]) -> RawMovie {
        raw.reviews = contents
            .iter()
            .enumerate()
            .map(|(idx, content)| ReviewRecord {
                id: Some(format!("r{}", idx)),
                content: Some(content.to_string()),
                ..Default::default()
            })
            .collect();
        raw
    }

    fn lexicon_pipeline() -> SentimentPipeline {
        SentimentPipeline::fallback(Arc::new(LexiconScorer::new()))
    }

    fn include_fallback() -> AggregationPolicy {
        AggregationPolicy {
            include_fallback: true,
            ..AggregationPolicy::default()
        }
    }

    fn shared(movies: Vec<RawMovie>) -> SharedCatalog {
        Arc::new(InMemoryCatalog::from_movies(movies))
    }

    // ============================================================
    // NORMALIZATION TESTS
    // ============================================================

    #[test]
    fn test_normalize_sparse_record_defaults() {
        let raw = RawMovie {
            id: "tt0000001".to_string(),
            ..Default::default()
        };

        let movie = normalize_movie(&raw, true);

        assert_eq!(movie.title, UNKNOWN_TITLE);
        assert_eq!(movie.year, DEFAULT_YEAR);
        assert_eq!(movie.poster, PLACEHOLDER_POSTER);
        assert_eq!(movie.backdrop, PLACEHOLDER_POSTER);
        assert_eq!(movie.genres, vec![DEFAULT_GENRE.to_string()]);
        assert_eq!(movie.duration, "Unknown");
        assert_eq!(movie.synopsis, NO_SYNOPSIS);
        assert_eq!(movie.imdb_rating, 0.0);
        assert_eq!(movie.sentiment_score, 0);
        assert_eq!(movie.review_count, 0);
        assert_eq!(movie.release_date, "2025");
        assert!(movie.cast.is_empty());
        assert!(movie.crew.is_empty());
    }

    #[test]
    fn test_normalize_full_record() {
        let raw = RawMovie {
            id: "tt0111161".to_string(),
            title: Some("The Shawshank Redemption".to_string()),
            year: Some(1994),
            cover_url: Some("small.jpg".to_string()),
            full_size_cover_url: Some("large.jpg".to_string()),
            genres: vec!["Drama".to_string()],
            runtimes: vec!["142".to_string()],
            plot: vec!["Two imprisoned men bond.::Some Author".to_string()],
            rating: Some(9.3),
            votes: Some(2_800_000),
            cast: vec![RawPerson {
                name: "Tim Robbins".to_string(),
                role: None,
                headshot: Some("tim.jpg".to_string()),
            }],
            director: vec![RawPerson {
                name: "Frank Darabont".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let movie = normalize_movie(&raw, true);

        assert_eq!(movie.poster, "large.jpg");
        assert_eq!(movie.duration, "142m");
        assert_eq!(movie.synopsis, "Two imprisoned men bond.");
        assert_eq!(movie.sentiment_score, 93);
        assert_eq!(movie.review_count, 2_800_000);
        assert_eq!(movie.cast[0].role, "Actor");
        assert_eq!(movie.cast[0].avatar.as_deref(), Some("tim.jpg"));
        assert_eq!(movie.crew[0].job, "Director");
    }

    #[test]
    fn test_normalize_summary_skips_people() {
        let mut raw = movie("tt1", "Heat");
        raw.cast = vec![RawPerson {
            name: "Al Pacino".to_string(),
            ..Default::default()
        }];

        let movie = normalize_movie(&raw, false);

        assert!(movie.cast.is_empty());
    }

    #[test]
    fn test_normalize_caps_cast_and_crew() {
        let mut raw = movie("tt1", "Ensemble");
        raw.cast = (0..10)
            .map(|i| RawPerson {
                name: format!("Actor {}", i),
                ..Default::default()
            })
            .collect();
        raw.director = (0..5)
            .map(|i| RawPerson {
                name: format!("Director {}", i),
                ..Default::default()
            })
            .collect();

        let movie = normalize_movie(&raw, true);

        assert_eq!(movie.cast.len(), 6);
        assert_eq!(movie.crew.len(), 3);
    }

    #[test]
    fn test_placeholder_sentiment() {
        assert_eq!(placeholder_sentiment(7.5), 75);
        assert_eq!(placeholder_sentiment(0.0), 0);
        assert_eq!(placeholder_sentiment(-1.0), 0);
    }

    #[test]
    fn test_movie_serializes_camel_case() {
        let json = serde_json::to_value(normalize_movie(&movie("tt1", "Heat"), false)).unwrap();

        assert!(json.get("imdbRating").is_some());
        assert!(json.get("sentimentScore").is_some());
        assert!(json.get("trailerUrl").is_some());
    }

    // ============================================================
    // SEARCH TESTS
    // ============================================================

    #[test]
    fn test_tokenize_title() {
        let tokens = tokenize_title("Spider-Man: No Way Home (2021)");

        assert!(tokens.contains("spider"));
        assert!(tokens.contains("man"));
        assert!(tokens.contains("2021"));
        assert_eq!(tokenize_query("Dark dark"), vec!["dark", "dark"]);
    }

    #[test]
    fn test_rank_by_matched_tokens() {
        // ARRANGE
        let index = DashMap::new();
        index_title(&index, "tt2", "Dark City");
        index_title(&index, "tt1", "The Dark Knight");
        index_title(&index, "tt3", "Knight and Day");

        // ACT
        let results = rank("dark knight", &index);

        // ASSERT
        assert_eq!(results[0], ("tt1".to_string(), 2));
        // equal scores fall back to id order
        assert_eq!(results[1], ("tt2".to_string(), 1));
        assert_eq!(results[2], ("tt3".to_string(), 1));
    }

    #[test]
    fn test_rank_no_match() {
        let index = DashMap::new();
        index_title(&index, "tt1", "Heat");

        assert!(rank("zzz", &index).is_empty());
    }

    #[test]
    fn test_search_filters_unlisted_kinds_and_limits() {
        let mut episode = movie("tt4", "Dark Episode");
        episode.kind = Some("episode".to_string());
        let mut series = movie("tt3", "Dark Series");
        series.kind = Some("tv series".to_string());
        let catalog = InMemoryCatalog::from_movies(vec![
            movie("tt1", "The Dark Knight"),
            movie("tt2", "Dark City"),
            series,
            episode,
        ]);

        let all: Vec<String> = catalog.search("dark", 10).into_iter().map(|m| m.id).collect();
        let limited = catalog.search("dark", 2);

        assert_eq!(all, vec!["tt1", "tt2", "tt3"]);
        assert_eq!(limited.len(), 2);
    }

    // ============================================================
    // CATALOG TESTS
    // ============================================================

    #[test]
    fn test_insert_assigns_missing_review_ids() {
        let mut raw = movie("tt1", "Heat");
        raw.reviews = vec![
            ReviewRecord::with_content("great"),
            ReviewRecord {
                id: Some("kept".to_string()),
                ..ReviewRecord::with_content("fine")
            },
        ];
        let catalog = InMemoryCatalog::new();

        catalog.insert(raw);
        let stored = catalog.get("tt1").unwrap();

        assert!(stored.reviews[0].id.as_deref().is_some_and(|id| !id.is_empty()));
        assert_eq!(stored.reviews[1].id.as_deref(), Some("kept"));
    }

    #[test]
    fn test_load_json_catalog() {
        // ARRANGE
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "tt2", "title": "Dark City", "fullSizeCoverUrl": "dc.jpg", "rating": 7.6},
                {"id": "tt1", "title": "Heat", "reviews": [{"author": "ana", "content": "great"}]}
            ]"#,
        )
        .unwrap();

        // ACT
        let catalog = InMemoryCatalog::load_json(&path).unwrap();

        // ASSERT
        assert_eq!(catalog.len(), 2);
        let ids: Vec<String> = catalog.all().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["tt1", "tt2"]);
        assert_eq!(
            catalog.get("tt2").unwrap().full_size_cover_url.as_deref(),
            Some("dc.jpg")
        );
        assert_eq!(catalog.get("tt1").unwrap().reviews.len(), 1);
    }

    #[test]
    fn test_load_json_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(InMemoryCatalog::load_json(&path).is_err());
        assert!(InMemoryCatalog::load_json(&dir.path().join("missing.json")).is_err());
    }

    // ============================================================
    // ASSEMBLY TESTS
    // ============================================================

    #[test]
    fn test_assemble_overrides_placeholder_with_reviews() {
        // ARRANGE
        let raw = with_reviews(
            rated("tt1", "Heat", 7.5, 100),
            &["great", "", "terrible", "wonderful"],
        );

        // ACT
        let movie = assemble_movie(&raw, &lexicon_pipeline(), include_fallback()).unwrap();

        // ASSERT
        // 2 positive of 3 with content
        assert_eq!(movie.sentiment_score, 67);
    }

    #[test]
    fn test_assemble_keeps_placeholder_without_signal() {
        let empty = with_reviews(rated("tt1", "Heat", 7.5, 100), &["", "  "]);
        let excluded = with_reviews(rated("tt2", "Dark City", 8.0, 100), &["great"]);

        let empty_movie = assemble_movie(&empty, &lexicon_pipeline(), include_fallback()).unwrap();
        let excluded_movie =
            assemble_movie(&excluded, &lexicon_pipeline(), AggregationPolicy::default()).unwrap();

        assert_eq!(empty_movie.sentiment_score, 75);
        assert_eq!(excluded_movie.sentiment_score, 80);
    }

    #[test]
    fn test_classify_reviews_keeps_order_and_skips_empty() {
        let mut raw = with_reviews(movie("tt1", "Heat"), &["great", "", "terrible"]);
        raw.reviews[0].author = Some("ana".to_string());

        let views = classify_reviews(&raw, &lexicon_pipeline(), AggregationPolicy::default())
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "r0");
        assert_eq!(views[0].author, "ana");
        assert_eq!(views[0].source, "IMDb");
        assert_eq!(views[0].sentiment, SentimentLabel::Positive);
        assert_eq!(views[0].confidence, FALLBACK_CONFIDENCE);
        assert_eq!(views[1].id, "r2");
        assert_eq!(views[1].author, "Anonymous");
        assert_eq!(views[1].sentiment, SentimentLabel::Negative);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search() {
        let catalog = shared(vec![movie("tt1", "The Dark Knight"), movie("tt2", "Heat")]);

        let Json(results) = handle_search(
            Query(SearchParams {
                query: "knight".to_string(),
                limit: None,
            }),
            Extension(catalog),
        )
        .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Dark Knight");
    }

    #[tokio::test]
    async fn test_handle_rows_ordering() {
        let catalog = shared(vec![
            rated("tt1", "Low", 5.0, 900),
            rated("tt2", "High", 9.0, 10),
            rated("tt3", "Mid", 7.0, 500),
        ]);

        let Json(top) = handle_top_rated(Extension(catalog.clone())).await;
        let Json(reviewed) = handle_most_reviewed(Extension(catalog)).await;

        let top_ids: Vec<&str> = top.items.iter().map(|m| m.id.as_str()).collect();
        let reviewed_ids: Vec<&str> = reviewed.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(top.kind, RowKind::TopRated);
        assert_eq!(top_ids, vec!["tt2", "tt3", "tt1"]);
        assert_eq!(reviewed.kind, RowKind::MostReviewed);
        assert_eq!(reviewed_ids, vec!["tt1", "tt3", "tt2"]);
    }

    #[tokio::test]
    async fn test_handle_get_movie_with_sentiment() {
        let catalog = shared(vec![with_reviews(
            rated("tt1", "Heat", 5.0, 10),
            &["great", "wonderful"],
        )]);

        let result = handle_get_movie(
            Path("tt1".to_string()),
            Extension(catalog),
            Extension(Arc::new(lexicon_pipeline())),
            Extension(include_fallback()),
        )
        .await;

        match result {
            Ok(Json(movie)) => assert_eq!(movie.sentiment_score, 100),
            Err((status, _)) => panic!("Unexpected error status {}", status),
        }
    }

    #[tokio::test]
    async fn test_handle_unknown_movie_is_not_found() {
        let catalog = shared(vec![movie("tt1", "Heat")]);
        let pipeline = Arc::new(lexicon_pipeline());

        let movie = handle_get_movie(
            Path("tt404".to_string()),
            Extension(catalog.clone()),
            Extension(pipeline.clone()),
            Extension(AggregationPolicy::default()),
        )
        .await;
        let reviews = handle_get_reviews(
            Path("tt404".to_string()),
            Extension(catalog),
            Extension(pipeline),
            Extension(AggregationPolicy::default()),
        )
        .await;

        match movie {
            Err((status, Json(body))) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body.detail, "Movie tt404 not found");
            }
            Ok(_) => panic!("Unknown id should be a 404"),
        }
        match reviews {
            Err((status, _)) => assert_eq!(status, StatusCode::NOT_FOUND),
            Ok(_) => panic!("Unknown id should be a 404"),
        }
    }
}
