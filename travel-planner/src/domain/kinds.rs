//! Closed vocabularies used to classify destinations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a label is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {vocabulary}: {label:?}")]
pub struct InvalidLabel {
    vocabulary: &'static str,
    label: String,
}

impl InvalidLabel {
    fn new(vocabulary: &'static str, label: &str) -> Self {
        Self {
            vocabulary,
            label: label.to_string(),
        }
    }
}

/// What kind of trip a destination offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Beach,
    Mountain,
    City,
    Cultural,
    Adventure,
}

impl DestinationType {
    pub const ALL: [DestinationType; 5] = [
        DestinationType::Beach,
        DestinationType::Mountain,
        DestinationType::City,
        DestinationType::Cultural,
        DestinationType::Adventure,
    ];

    /// Parse a lowercase label such as `"beach"`.
    pub fn parse(s: &str) -> Result<Self, InvalidLabel> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidLabel::new("destination type", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Beach => "beach",
            DestinationType::Mountain => "mountain",
            DestinationType::City => "city",
            DestinationType::Cultural => "cultural",
            DestinationType::Adventure => "adventure",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prevailing climate at a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Tropical,
    Temperate,
    Cold,
    Arid,
}

impl Climate {
    pub const ALL: [Climate; 4] = [
        Climate::Tropical,
        Climate::Temperate,
        Climate::Cold,
        Climate::Arid,
    ];

    /// Parse a lowercase label such as `"arid"`.
    pub fn parse(s: &str) -> Result<Self, InvalidLabel> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidLabel::new("climate", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Tropical => "tropical",
            Climate::Temperate => "temperate",
            Climate::Cold => "cold",
            Climate::Arid => "arid",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough price bracket of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl BudgetLevel {
    pub const ALL: [BudgetLevel; 3] = [BudgetLevel::Low, BudgetLevel::Medium, BudgetLevel::High];

    /// Parse a lowercase label such as `"medium"`.
    pub fn parse(s: &str) -> Result<Self, InvalidLabel> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| InvalidLabel::new("budget level", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }

    /// Dollar-sign shorthand used in listings ("$", "$$", "$$$").
    pub fn symbol(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "$",
            BudgetLevel::Medium => "$$",
            BudgetLevel::High => "$$$",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
