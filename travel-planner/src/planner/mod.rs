//! Destination search and itinerary planning.
//!
//! Pure, synchronous logic over an immutable [`Catalog`](crate::catalog::Catalog).
//! Nothing here blocks or keeps state between calls, so the planner can be
//! used from any number of request handlers at once.

mod config;
mod engine;
mod itinerary;
mod rank;
mod search;

pub use config::PlannerConfig;
pub use engine::Planner;
pub use itinerary::{ItineraryError, ItineraryRequest, build_itinerary};
pub use rank::rank_by_popularity;
pub use search::{SearchCriteria, search};
