//! Day-by-day itinerary generation.
//!
//! The builder walks a cursor over the requested destinations. Each day is
//! spent at the destination under the cursor, filled with activities drawn
//! round-robin from that destination's activity list. The cursor moves on
//! when the day number is a multiple of the current destination's typical
//! stay length, and sticks at the last destination once it gets there.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{
    Activity, Destination, Itinerary, ItineraryDay, ItineraryPreferences, Pace, TimeOfDay,
};

use super::config::PlannerConfig;

/// Error from itinerary generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// None of the requested ids exist in the catalog
    #[error("no valid destinations found")]
    NoValidDestinations,
}

/// Request for an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRequest {
    /// Destinations to visit, in order. Unknown ids are skipped.
    pub destination_ids: Vec<String>,

    /// Total length of the trip in days. Zero gives an empty plan.
    pub duration: u32,

    pub pace: Pace,

    /// Carried through to the result; does not affect planning.
    pub interests: Vec<String>,

    /// First day of the trip, used to date each day.
    pub start_date: Option<NaiveDate>,

    /// Daily budget, carried through for display.
    pub budget_per_day: Option<f64>,
}

impl ItineraryRequest {
    /// Create a request with moderate pace and no preferences.
    pub fn new<S: Into<String>>(destination_ids: impl IntoIterator<Item = S>, duration: u32) -> Self {
        Self {
            destination_ids: destination_ids.into_iter().map(Into::into).collect(),
            duration,
            pace: Pace::default(),
            interests: Vec::new(),
            start_date: None,
            budget_per_day: None,
        }
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_interests<S: Into<String>>(mut self, interests: impl IntoIterator<Item = S>) -> Self {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_budget_per_day(mut self, budget: f64) -> Self {
        self.budget_per_day = Some(budget);
        self
    }
}

/// Build an itinerary from the catalog.
///
/// Fails only when none of the requested destinations resolve.
pub fn build_itinerary(
    catalog: &Catalog,
    config: &PlannerConfig,
    request: &ItineraryRequest,
) -> Result<Itinerary, ItineraryError> {
    let stops = catalog.get_by_ids(&request.destination_ids);
    let Some(last) = stops.len().checked_sub(1) else {
        return Err(ItineraryError::NoValidDestinations);
    };

    let mut cursor = 0;
    let mut days = Vec::new();
    let mut total_cost = 0.0;

    for day in 1..=request.duration {
        let destination = stops[cursor];

        days.push(ItineraryDay {
            day,
            date: request
                .start_date
                .and_then(|start| start.checked_add_days(Days::new(u64::from(day - 1)))),
            destination: destination.id.clone(),
            activities: plan_day(destination, request.pace, config),
            total_cost: destination.average_daily_cost,
            notes: (day == 1).then(|| config.arrival_note.clone()),
        });
        total_cost += destination.average_daily_cost;

        // The day number is absolute, not relative to arrival here.
        if day % destination.average_stay_days.get() == 0 && cursor < last {
            cursor += 1;
            debug!(day, next = %stops[cursor].id, "moving to next destination");
        }
    }

    Ok(Itinerary {
        title: title(request.duration, &stops),
        destinations: stops.iter().map(|d| d.id.clone()).collect(),
        duration: request.duration,
        days,
        total_cost,
        preferences: ItineraryPreferences {
            pace: request.pace,
            interests: request.interests.clone(),
            budget_per_day: request.budget_per_day,
            start_date: request.start_date,
        },
    })
}

/// Activities for one day at `destination`.
///
/// Activity `i` takes the theme at `i mod len` of the destination's list.
fn plan_day(destination: &Destination, pace: Pace, config: &PlannerConfig) -> Vec<Activity> {
    let cost = config.activity_cost(destination.average_daily_cost);

    destination
        .activities
        .iter()
        .cycle()
        .take(pace.activities_per_day())
        .enumerate()
        .map(|(i, theme)| Activity {
            name: theme.clone(),
            description: format!("Enjoy {} in {}", theme, destination.name),
            duration_hours: pace.hours_per_activity(),
            cost,
            time_of_day: TimeOfDay::for_slot(i),
        })
        .collect()
}

/// "5-Day Trip: Kyoto → Lisbon"
fn title(duration: u32, stops: &[&Destination]) -> String {
    let names: Vec<&str> = stops.iter().map(|d| d.name.as_str()).collect();
    format!("{}-Day Trip: {}", duration, names.join(" → "))
}

#[cfg(test)]
#[path = "itinerary_tests.rs"]
mod tests;
