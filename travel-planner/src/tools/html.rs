//! Askama templates for the UI variants of the tools.

use askama::Template;

use crate::catalog::Catalog;
use crate::domain::{Destination, Itinerary};

use super::markdown::money;

// ============================================================================
// Templates (extend base.html)
// ============================================================================

/// Greeting card.
#[derive(Template)]
#[template(path = "hello.html")]
pub struct HelloTemplate<'a> {
    pub name: &'a str,
}

/// Search results as a grid of cards.
#[derive(Template)]
#[template(path = "destination_list.html")]
pub struct DestinationListTemplate {
    pub heading: String,
    pub destinations: Vec<DestinationView>,
}

/// One destination in full.
#[derive(Template)]
#[template(path = "destination_detail.html")]
pub struct DestinationDetailTemplate {
    pub destination: DestinationView,
    pub best_time: String,
    pub attractions: Vec<String>,
    pub activities: Vec<String>,
    pub airport: String,
    pub stay_days: u32,
}

/// Itinerary timeline.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub title: String,
    pub pace: String,
    pub interests: String,
    pub total_cost: String,
    /// Empty when the traveller gave no budget.
    pub budget: String,
    pub over_budget: bool,
    pub days: Vec<DayView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Destination summary for cards.
#[derive(Debug, Clone)]
pub struct DestinationView {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub kind: String,
    pub climate: String,
    pub budget_symbol: String,
    pub daily_cost: String,
    pub rating: String,
    pub popularity: u32,
}

impl DestinationView {
    pub fn from_destination(d: &Destination) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            country: d.country.clone(),
            description: d.description.clone(),
            kind: d.kind.to_string(),
            climate: d.climate.to_string(),
            budget_symbol: d.budget_level.symbol().to_string(),
            daily_cost: money(d.average_daily_cost),
            rating: format!("{:.1}", d.rating),
            popularity: d.popularity_score,
        }
    }
}

/// One day of the timeline.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: u32,
    /// Empty when the trip has no start date.
    pub date: String,
    pub destination_name: String,
    /// Empty when the day has no note.
    pub note: String,
    pub total_cost: String,
    pub activities: Vec<ActivityView>,
}

#[derive(Debug, Clone)]
pub struct ActivityView {
    pub time_of_day: &'static str,
    pub name: String,
    pub description: String,
    pub hours: u32,
    pub cost: String,
}

impl DestinationDetailTemplate {
    pub fn from_destination(d: &Destination) -> Self {
        Self {
            destination: DestinationView::from_destination(d),
            best_time: d.best_time_to_visit.join(", "),
            attractions: d.top_attractions.clone(),
            activities: d.activities.clone(),
            airport: d.main_airport.clone(),
            stay_days: d.average_stay_days.get(),
        }
    }
}

impl ItineraryTemplate {
    /// Build the view; destination names are looked up in `catalog`.
    pub fn from_itinerary(itinerary: &Itinerary, catalog: &Catalog) -> Self {
        let prefs = &itinerary.preferences;

        let days = itinerary
            .days
            .iter()
            .map(|day| DayView {
                day: day.day,
                date: day.date.map(|d| d.format("%a %d %b %Y").to_string()).unwrap_or_default(),
                destination_name: catalog
                    .get_by_id(&day.destination)
                    .map_or_else(|| day.destination.clone(), Destination::display_name),
                note: day.notes.clone().unwrap_or_default(),
                total_cost: money(day.total_cost),
                activities: day
                    .activities
                    .iter()
                    .map(|a| ActivityView {
                        time_of_day: a.time_of_day.label(),
                        name: a.name.clone(),
                        description: a.description.clone(),
                        hours: a.duration_hours,
                        cost: money(a.cost),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: itinerary.title.clone(),
            pace: prefs.pace.to_string(),
            interests: prefs.interests.join(", "),
            total_cost: money(itinerary.total_cost),
            budget: prefs.budget_per_day.map(money).unwrap_or_default(),
            over_budget: itinerary.exceeds_budget(),
            days,
        }
    }
}
