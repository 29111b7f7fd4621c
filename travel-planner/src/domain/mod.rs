//! Domain types for the travel planner.
//!
//! Destinations, the vocabularies that classify them, and the itinerary
//! values produced by the planner.

mod destination;
mod itinerary;
mod kinds;
mod pace;

pub use destination::Destination;
pub use itinerary::{Activity, Itinerary, ItineraryDay, ItineraryPreferences};
pub use kinds::{BudgetLevel, Climate, DestinationType, InvalidLabel};
pub use pace::{Pace, TimeOfDay};

#[cfg(test)]
pub(crate) use destination::fixtures;
