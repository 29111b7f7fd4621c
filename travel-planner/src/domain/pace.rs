//! Trip pacing and time-of-day slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How full each day of an itinerary should be.
///
/// More activities per day means shorter activities: the touring hours in a
/// day stay roughly fixed, so a packed day is a more rushed one.
///
/// Deserialization is lenient: any label other than exactly `relaxed` or
/// `packed` falls back to [`Pace::Moderate`]. Labels are not trimmed or
/// case-folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Packed,
}

impl Pace {
    /// Map a label to a pace, defaulting to moderate.
    pub fn from_label(label: &str) -> Self {
        match label {
            "relaxed" => Pace::Relaxed,
            "packed" => Pace::Packed,
            _ => Pace::Moderate,
        }
    }

    /// Number of activities scheduled on each day.
    pub fn activities_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 2,
            Pace::Moderate => 3,
            Pace::Packed => 4,
        }
    }

    /// Length of each activity in hours.
    pub fn hours_per_activity(&self) -> u32 {
        match self {
            Pace::Relaxed => 4,
            Pace::Moderate => 3,
            Pace::Packed => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Packed => "packed",
        }
    }
}

impl From<String> for Pace {
    fn from(label: String) -> Self {
        Pace::from_label(&label)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the day an activity is scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Slot for the activity at `index` within a day.
    ///
    /// The first activity is in the morning, the second in the afternoon,
    /// and everything after that is in the evening.
    pub fn for_slot(index: usize) -> Self {
        match index {
            0 => TimeOfDay::Morning,
            1 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    /// Capitalised label for display ("Morning").
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
