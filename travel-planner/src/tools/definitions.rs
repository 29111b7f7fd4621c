//! Tool names, descriptions and input schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{BudgetLevel, Climate, DestinationType, Pace};

/// Description of a tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments object.
    pub input_schema: Value,
}

/// The tools served, independent of presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Hello,
    Search,
    Details,
    Itinerary,
}

/// How a tool presents its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Markdown text.
    Text,
    /// An HTML UI resource.
    Ui,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Hello, Tool::Search, Tool::Details, Tool::Itinerary];

    /// Split a tool name into the tool and its variant.
    ///
    /// `search_destinations_ui` parses as `(Search, Ui)`.
    pub fn parse(name: &str) -> Option<(Tool, Variant)> {
        let (base, variant) = match name.strip_suffix("_ui") {
            Some(base) => (base, Variant::Ui),
            None => (name, Variant::Text),
        };
        let tool = Self::ALL.into_iter().find(|t| t.base_name() == base)?;
        Some((tool, variant))
    }

    fn base_name(&self) -> &'static str {
        match self {
            Tool::Hello => "hello_world",
            Tool::Search => "search_destinations",
            Tool::Details => "get_destination_details",
            Tool::Itinerary => "create_itinerary",
        }
    }

    /// Full tool name for a variant.
    pub fn name(&self, variant: Variant) -> String {
        match variant {
            Variant::Text => self.base_name().to_string(),
            Variant::Ui => format!("{}_ui", self.base_name()),
        }
    }

    fn description(&self, variant: Variant) -> &'static str {
        match (self, variant) {
            (Tool::Hello, Variant::Text) => "A simple text-based tool that returns a greeting",
            (Tool::Hello, Variant::Ui) => {
                "A UI-based tool that returns an interactive greeting card"
            }
            (Tool::Search, Variant::Text) => {
                "Search travel destinations by free text, type, budget, climate and minimum rating. \
                 Results are ordered by popularity."
            }
            (Tool::Search, Variant::Ui) => {
                "Search travel destinations and show the results as interactive cards"
            }
            (Tool::Details, Variant::Text) => {
                "Get full details for a destination: attractions, activities, best time to visit"
            }
            (Tool::Details, Variant::Ui) => "Show full details for a destination as an interactive page",
            (Tool::Itinerary, Variant::Text) => {
                "Create a day-by-day itinerary visiting the given destinations in order"
            }
            (Tool::Itinerary, Variant::Ui) => {
                "Create a day-by-day itinerary and show it as an interactive timeline"
            }
        }
    }

    fn input_schema(&self) -> Value {
        match self {
            Tool::Hello => json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name to greet" }
                },
                "required": ["name"]
            }),
            Tool::Search => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to look for in name, country or description"
                    },
                    "type": {
                        "type": "string",
                        "enum": DestinationType::ALL.map(|t| t.as_str()),
                        "description": "Kind of destination"
                    },
                    "budget": {
                        "type": "string",
                        "enum": BudgetLevel::ALL.map(|b| b.as_str()),
                        "description": "Budget level"
                    },
                    "climate": {
                        "type": "string",
                        "enum": Climate::ALL.map(|c| c.as_str()),
                        "description": "Climate"
                    },
                    "minRating": {
                        "type": "number",
                        "minimum": 1,
                        "maximum": 5,
                        "description": "Minimum rating"
                    }
                }
            }),
            Tool::Details => json!({
                "type": "object",
                "properties": {
                    "destinationId": {
                        "type": "string",
                        "description": "Destination id, as returned by search_destinations"
                    }
                },
                "required": ["destinationId"]
            }),
            Tool::Itinerary => json!({
                "type": "object",
                "properties": {
                    "destinationIds": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Destination ids to visit, in order"
                    },
                    "duration": {
                        "type": "integer",
                        "description": "Trip length in days"
                    },
                    "pace": {
                        "type": "string",
                        "enum": [Pace::Relaxed.as_str(), Pace::Moderate.as_str(), Pace::Packed.as_str()],
                        "default": Pace::Moderate.as_str(),
                        "description": "How many activities to fit in each day"
                    },
                    "interests": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Traveller interests"
                    },
                    "startDate": {
                        "type": "string",
                        "format": "date",
                        "description": "First day of the trip (YYYY-MM-DD)"
                    },
                    "budgetPerDay": {
                        "type": "number",
                        "description": "Daily budget in USD"
                    }
                },
                "required": ["destinationIds", "duration"]
            }),
        }
    }

    pub fn definition(&self, variant: Variant) -> ToolDefinition {
        ToolDefinition {
            name: self.name(variant),
            description: self.description(variant).to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Every tool, text variant first.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    Tool::ALL
        .into_iter()
        .flat_map(|t| [t.definition(Variant::Text), t.definition(Variant::Ui)])
        .collect()
}
