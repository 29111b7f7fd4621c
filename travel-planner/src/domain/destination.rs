//! Destination records.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::kinds::{BudgetLevel, Climate, DestinationType};

/// A travel destination in the catalog.
///
/// Records are loaded once at startup and never change afterwards. The
/// [`Catalog`](crate::catalog::Catalog) validates the invariants that are not
/// carried by the field types (non-empty activities, rating range, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique key, e.g. `"kyoto"`.
    pub id: String,

    pub name: String,

    pub country: String,

    #[serde(rename = "type")]
    pub kind: DestinationType,

    pub description: String,

    pub climate: Climate,

    pub budget_level: BudgetLevel,

    /// Typical spend per day, in USD.
    pub average_daily_cost: f64,

    /// Visitor rating, 1 to 5.
    pub rating: f64,

    /// Relative popularity, 1 to 100. Search results are ordered by this.
    pub popularity_score: u32,

    pub best_time_to_visit: Vec<String>,

    pub top_attractions: Vec<String>,

    /// Activity themes used to fill itinerary days. Never empty.
    pub activities: Vec<String>,

    /// How many days a typical visit lasts; drives itinerary pacing.
    pub average_stay_days: NonZeroU32,

    pub main_airport: String,
}

impl Destination {
    /// Case-insensitive substring match against name, country or description.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.name, &self.country, &self.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// "Name, Country" label for listings.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::destination;
    use super::*;

    #[test]
    fn mentions_any_text_field() {
        let mut d = destination("lisbon");
        d.name = "Lisbon".to_string();
        d.country = "Portugal".to_string();
        d.description = "Hilly city of trams and fado".to_string();

        assert!(d.mentions("lisb"));
        assert!(d.mentions("portugal"));
        assert!(d.mentions("fado"));
        assert!(!d.mentions("beach"));
    }

    #[test]
    fn mentions_ignores_case_of_record() {
        let mut d = destination("x");
        d.name = "ReykjaVIK".to_string();
        assert!(d.mentions("reykjavik"));
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "kyoto",
            "name": "Kyoto",
            "country": "Japan",
            "type": "cultural",
            "description": "Temples and gardens",
            "climate": "temperate",
            "budgetLevel": "medium",
            "averageDailyCost": 150,
            "rating": 4.8,
            "popularityScore": 90,
            "bestTimeToVisit": ["March", "April"],
            "topAttractions": ["Fushimi Inari"],
            "activities": ["temple visits"],
            "averageStayDays": 3,
            "mainAirport": "Kansai International (KIX)"
        }"#;

        let d: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(d.kind, DestinationType::Cultural);
        assert_eq!(d.budget_level, BudgetLevel::Medium);
        assert_eq!(d.average_daily_cost, 150.0);
        assert_eq!(d.average_stay_days.get(), 3);
    }

    #[test]
    fn zero_stay_days_is_rejected() {
        let mut value = serde_json::to_value(destination("x")).unwrap();
        value["averageStayDays"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Destination>(value).is_err());
    }
}
