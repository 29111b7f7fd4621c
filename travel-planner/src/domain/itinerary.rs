//! Generated itineraries.
//!
//! These values are built fresh for each request and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pace::{Pace, TimeOfDay};

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub description: String,
    /// Length in hours.
    pub duration_hours: u32,
    /// Informational line item; not included in the day total.
    pub cost: f64,
    pub time_of_day: TimeOfDay,
}

/// One day of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,

    /// Calendar date, when the trip has a start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Destination id.
    pub destination: String,

    pub activities: Vec<Activity>,

    /// Flat per-day cost of the destination.
    pub total_cost: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Traveller preferences carried alongside an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPreferences {
    pub pace: Pace,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// A complete day-by-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub title: String,
    /// Ids of the destinations that resolved, in visiting order.
    pub destinations: Vec<String>,
    /// Requested length in days.
    pub duration: u32,
    pub days: Vec<ItineraryDay>,
    pub total_cost: f64,
    pub preferences: ItineraryPreferences,
}

impl Itinerary {
    /// Sum of the informational activity costs across all days.
    ///
    /// This differs from [`Itinerary::total_cost`], which counts each day at
    /// the destination's flat daily cost.
    pub fn activity_cost(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|d| d.activities.iter())
            .map(|a| a.cost)
            .sum()
    }

    /// Whether any day costs more than the traveller's daily budget.
    pub fn exceeds_budget(&self) -> bool {
        self.preferences
            .budget_per_day
            .is_some_and(|budget| self.days.iter().any(|d| d.total_cost > budget))
    }
}
