//! Catalog record normalization.
//!
//! Fills every gap in a `RawMovie` with a display default so clients always get
//! a complete `Movie`. The sentiment score set here is only a rating-based
//! placeholder; `assembler` overwrites it when reviews produce a score.

use super::types::{CastMember, CrewMember, Movie, RawMovie};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const DEFAULT_YEAR: u32 = 2025;
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750?text=No+Poster";
pub const DEFAULT_GENRE: &str = "Drama";
pub const NO_SYNOPSIS: &str = "No synopsis available.";

const MAX_CAST: usize = 6;
const MAX_CREW: usize = 3;

/// Rating (0-10) scaled to 0-100 and truncated.
pub fn placeholder_sentiment(rating: f64) -> u32 {
    (rating.max(0.0) * 10.0) as u32
}

fn synopsis(plot: &[String]) -> String {
    plot.first()
        .and_then(|text| text.split("::").next())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_SYNOPSIS.to_string())
}

pub fn normalize_movie(raw: &RawMovie, full_details: bool) -> Movie {
    let title = raw
        .title
        .clone()
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let year = raw.year.unwrap_or(DEFAULT_YEAR);

    let poster = raw
        .full_size_cover_url
        .clone()
        .or_else(|| raw.cover_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string());

    let genres = if raw.genres.is_empty() {
        vec![DEFAULT_GENRE.to_string()]
    } else {
        raw.genres.clone()
    };

    let duration = raw
        .runtimes
        .first()
        .map(|minutes| format!("{}m", minutes))
        .unwrap_or_else(|| "Unknown".to_string());

    let rating = raw.rating.unwrap_or(0.0);

    let (cast, crew) = if full_details {
        let cast = raw
            .cast
            .iter()
            .take(MAX_CAST)
            .map(|person| CastMember {
                name: person.name.clone(),
                role: person.role.clone().unwrap_or_else(|| "Actor".to_string()),
                avatar: person.headshot.clone(),
            })
            .collect();
        let crew = raw
            .director
            .iter()
            .take(MAX_CREW)
            .map(|person| CrewMember {
                name: person.name.clone(),
                job: "Director".to_string(),
            })
            .collect();
        (cast, crew)
    } else {
        (Vec::new(), Vec::new())
    };

    Movie {
        id: raw.id.clone(),
        title,
        year,
        genres,
        duration,
        synopsis: synopsis(&raw.plot),
        backdrop: poster.clone(),
        poster,
        imdb_rating: rating,
        sentiment_score: placeholder_sentiment(rating),
        review_count: raw.votes.unwrap_or(0),
        release_date: year.to_string(),
        cast,
        crew,
        trailer_url: String::new(),
    }
}
