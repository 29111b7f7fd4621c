//! Tool argument payloads.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::Pace;
use crate::planner::ItineraryRequest;

/// Arguments of `hello_world` and `hello_world_ui`.
#[derive(Debug, Deserialize)]
pub struct HelloArgs {
    pub name: String,
}

/// Arguments of `get_destination_details` and its UI variant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsArgs {
    pub destination_id: String,
}

/// Arguments of `create_itinerary` and its UI variant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryArgs {
    pub destination_ids: Vec<String>,

    /// Signed so that zero or negative lengths are accepted; they plan
    /// nothing.
    pub duration: i64,

    pub pace: Option<Pace>,

    #[serde(default)]
    pub interests: Vec<String>,

    pub start_date: Option<NaiveDate>,

    pub budget_per_day: Option<f64>,
}

impl ItineraryArgs {
    pub fn into_request(self) -> ItineraryRequest {
        let duration = u32::try_from(self.duration.max(0)).unwrap_or(u32::MAX);
        ItineraryRequest {
            destination_ids: self.destination_ids,
            duration,
            pace: self.pace.unwrap_or_default(),
            interests: self.interests,
            start_date: self.start_date,
            budget_per_day: self.budget_per_day,
        }
    }
}
