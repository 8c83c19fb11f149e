//! Training Module
//!
//! One-shot batch job that turns a labelled CSV into the two artifact blobs the
//! service loads at startup. Not used at request time.

pub mod dataset;
pub mod trainer;
