//! Planner entry point.

use crate::catalog::Catalog;
use crate::domain::{Destination, Itinerary};

use super::config::PlannerConfig;
use super::itinerary::{ItineraryError, ItineraryRequest, build_itinerary};
use super::search::{SearchCriteria, search};

/// Search and itinerary planning over a catalog.
///
/// Holds only shared references; every call is independent of the others,
/// so a planner can be created per request.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Destinations matching `criteria`, most popular first.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&'a Destination> {
        search(self.catalog, criteria)
    }

    /// Look up a single destination.
    pub fn destination(&self, id: &str) -> Option<&'a Destination> {
        self.catalog.get_by_id(id)
    }

    /// Build a day-by-day itinerary.
    pub fn build_itinerary(&self, request: &ItineraryRequest) -> Result<Itinerary, ItineraryError> {
        build_itinerary(self.catalog, self.config, request)
    }
}
