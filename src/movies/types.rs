//! Movie Data Types
//!
//! `RawMovie` mirrors what the catalog hands over (sparse, every field
//! optional). `Movie` is the normalized record served to clients, with camelCase
//! JSON names.

use serde::{Deserialize, Serialize};

use crate::sentiment::types::{ReviewRecord, SentimentLabel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}

/// A movie record as stored by the external catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMovie {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    /// "movie", "tv movie", "tv series", "episode", ...
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub full_size_cover_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Minutes, as strings.
    #[serde(default)]
    pub runtimes: Vec<String>,
    /// Plot summaries, optionally suffixed with "::author".
    #[serde(default)]
    pub plot: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: Option<u64>,
    #[serde(default)]
    pub cast: Vec<RawPerson>,
    #[serde(default)]
    pub director: Vec<RawPerson>,
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// Normalized movie record served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: u32,
    pub genres: Vec<String>,
    pub duration: String,
    pub synopsis: String,
    pub poster: String,
    pub backdrop: String,
    pub imdb_rating: f64,
    /// Placeholder derived from the rating until review aggregation replaces it.
    pub sentiment_score: u32,
    pub review_count: u64,
    pub release_date: String,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub trailer_url: String,
}

/// A review annotated with the pipeline's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: String,
    pub author: String,
    pub source: String,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    TopRated,
    MostReviewed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRow {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RowKind,
    pub items: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub limit: Option<usize>,
}
