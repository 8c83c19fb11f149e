//! Movies Module
//!
//! Movie discovery on top of an external catalog, with review sentiment folded
//! into each movie record.
//!
//! ## Responsibilities
//! - **Catalog**: Read-only access to raw movie and review records.
//! - **Normalization**: Filling gaps in raw records with display defaults.
//! - **Search**: Ranking titles by matched query tokens.
//! - **Assembly**: Replacing the rating-based placeholder score with the
//!   aggregated review sentiment.
//!
//! ## Submodules
//! - **`assembler`**: Movie details and per-review decisions.
//! - **`catalog`**: `MovieCatalog` trait and the in-memory JSON catalog.
//! - **`engine`**: Title tokenization and ranking.
//! - **`handlers`**: HTTP handlers for the `/movies` routes.
//! - **`normalize`**: Raw record -> `Movie`.
//! - **`types`**: Raw and normalized movie DTOs.

pub mod assembler;
pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod normalize;
pub mod types;

#[cfg(test)]
mod tests;
