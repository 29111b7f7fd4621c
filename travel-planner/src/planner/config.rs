//! Planner configuration.

/// Tunable constants for itinerary generation.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Share of a destination's daily cost charged per activity.
    pub activity_cost_ratio: f64,

    /// Note attached to the first day of every itinerary.
    pub arrival_note: String,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(activity_cost_ratio: f64, arrival_note: impl Into<String>) -> Self {
        Self {
            activity_cost_ratio,
            arrival_note: arrival_note.into(),
        }
    }

    /// Cost of one activity at a destination with the given daily cost,
    /// rounded to the nearest whole unit.
    pub fn activity_cost(&self, daily_cost: f64) -> f64 {
        (daily_cost * self.activity_cost_ratio).round()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            activity_cost_ratio: 0.3,
            arrival_note: "Arrival day - take it easy and get settled in".to_string(),
        }
    }
}
