//! Destination catalog.
//!
//! An immutable, in-memory list of destinations with lookup by id. The
//! catalog is validated once when it is built; after that every record is
//! guaranteed to satisfy the invariants the planner relies on.

mod error;

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::Destination;

pub use error::CatalogError;

/// Destinations bundled with the binary.
const BUILTIN_CATALOG: &str = include_str!("destinations.json");

/// Read-only set of destinations, in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build a catalog, validating every record.
    ///
    /// Rejects duplicate ids, empty activity lists, ratings outside 1..=5,
    /// popularity outside 1..=100 and non-positive daily costs. Stay length
    /// is already guaranteed non-zero by its type.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(destinations.len());

        for d in &destinations {
            if !seen.insert(d.id.as_str()) {
                return Err(CatalogError::DuplicateId(d.id.clone()));
            }
            if d.activities.is_empty() {
                return Err(CatalogError::NoActivities(d.id.clone()));
            }
            if !(1.0..=5.0).contains(&d.rating) {
                return Err(CatalogError::InvalidRating {
                    id: d.id.clone(),
                    rating: d.rating,
                });
            }
            if !(1..=100).contains(&d.popularity_score) {
                return Err(CatalogError::InvalidPopularity {
                    id: d.id.clone(),
                    score: d.popularity_score,
                });
            }
            // Written this way round so NaN is rejected too.
            if !(d.average_daily_cost > 0.0) {
                return Err(CatalogError::InvalidDailyCost {
                    id: d.id.clone(),
                    cost: d.average_daily_cost,
                });
            }
        }

        Ok(Self { destinations })
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of destination records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(path = %path.display(), count = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    /// Look up a destination by exact id.
    pub fn get_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Look up several destinations, keeping the order of `ids`.
    ///
    /// Ids that do not resolve are dropped silently; the result may be
    /// shorter than the input, or empty.
    pub fn get_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Destination> {
        ids.iter()
            .filter_map(|id| self.get_by_id(id.as_ref()))
            .collect()
    }

    /// All destinations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
