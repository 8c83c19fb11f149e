//! Movie Catalog
//!
//! The source of raw movie and review records. The service only depends on the
//! `MovieCatalog` trait; `InMemoryCatalog` serves a JSON snapshot loaded at
//! startup.

use super::engine::{index_title, rank};
use super::types::RawMovie;

use anyhow::{Context, Result};
use dashmap::DashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// Kinds of catalog entries that are listed in search results.
const LISTED_KINDS: &[&str] = &["movie", "tv movie", "tv series"];

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

pub trait MovieCatalog: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> Vec<RawMovie>;

    fn get(&self, movie_id: &str) -> Option<RawMovie>;

    fn all(&self) -> Vec<RawMovie>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type SharedCatalog = Arc<dyn MovieCatalog>;

fn is_listed(movie: &RawMovie) -> bool {
    match movie.kind.as_deref() {
        Some(kind) => LISTED_KINDS.contains(&kind),
        None => true,
    }
}

#[derive(Default)]
pub struct InMemoryCatalog {
    movies: DashMap<String, RawMovie>,
    /// title token -> movie ids
    title_index: DashMap<String, Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: impl IntoIterator<Item = RawMovie>) -> Self {
        let catalog = Self::new();
        for movie in movies {
            catalog.insert(movie);
        }
        catalog
    }

    /// Loads a JSON array of `RawMovie` records.
    pub fn load_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog: {:?}", path))?;
        let movies: Vec<RawMovie> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse catalog: {:?}", path))?;

        let catalog = Self::from_movies(movies);
        tracing::info!("Loaded {} movies from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Adds or replaces a movie. Reviews without an id get a generated one.
    pub fn insert(&self, mut movie: RawMovie) {
        for review in movie.reviews.iter_mut() {
            if review.id.is_none() {
                review.id = Some(uuid::Uuid::new_v4().to_string());
            }
        }
        if let Some(title) = movie.title.as_deref() {
            index_title(&self.title_index, &movie.id, title);
        }
        tracing::trace!("Catalog insert {} ({} reviews)", movie.id, movie.reviews.len());
        self.movies.insert(movie.id.clone(), movie);
    }
}

impl MovieCatalog for InMemoryCatalog {
    fn search(&self, query: &str, limit: usize) -> Vec<RawMovie> {
        rank(query, &self.title_index)
            .into_iter()
            .filter_map(|(movie_id, _)| self.movies.get(&movie_id).map(|m| m.value().clone()))
            .filter(is_listed)
            .take(limit)
            .collect()
    }

    fn get(&self, movie_id: &str) -> Option<RawMovie> {
        self.movies.get(movie_id).map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<RawMovie> {
        let mut movies: Vec<RawMovie> = self
            .movies
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        movies.sort_by(|a, b| a.id.cmp(&b.id));
        movies
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}
