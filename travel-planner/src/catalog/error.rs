//! Catalog loading errors.

use std::path::PathBuf;

/// Errors raised while loading or validating a destination catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a valid JSON array of destinations
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an id
    #[error("duplicate destination id: {0}")]
    DuplicateId(String),

    /// A record has no activities to build itineraries from
    #[error("destination {0} has no activities")]
    NoActivities(String),

    /// Rating outside 1..=5
    #[error("destination {id} has rating {rating}, expected 1 to 5")]
    InvalidRating { id: String, rating: f64 },

    /// Popularity outside 1..=100
    #[error("destination {id} has popularity {score}, expected 1 to 100")]
    InvalidPopularity { id: String, score: u32 },

    /// Daily cost not strictly positive
    #[error("destination {id} has daily cost {cost}, expected a positive amount")]
    InvalidDailyCost { id: String, cost: f64 },
}
