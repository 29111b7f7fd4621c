//! The travel tools: dispatch by name, render as Markdown or HTML.

mod args;
mod content;
mod definitions;
mod error;
pub mod html;
pub mod markdown;

use std::sync::Arc;

use askama::Template;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

pub use args::{DetailsArgs, HelloArgs, ItineraryArgs};
pub use content::{MIME_HTML, MIME_URI_LIST, ToolContent, ToolResult, UiResource, ui_uri};
pub use definitions::{Tool, ToolDefinition, Variant, tool_definitions};
pub use error::ToolError;

use crate::catalog::Catalog;
use crate::planner::{ItineraryError, Planner, PlannerConfig, SearchCriteria};

use html::{
    DestinationDetailTemplate, DestinationListTemplate, DestinationView, HelloTemplate,
    ItineraryTemplate,
};

/// Serves every tool over a shared catalog.
#[derive(Debug, Clone)]
pub struct TravelTools {
    catalog: Arc<Catalog>,
    config: Arc<PlannerConfig>,
}

impl TravelTools {
    pub fn new(catalog: Arc<Catalog>, config: Arc<PlannerConfig>) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Run the tool called `name` with JSON `arguments`.
    ///
    /// A `null` argument value is treated as an empty object.
    pub fn call(&self, name: &str, arguments: Value) -> Result<ToolResult, ToolError> {
        let (tool, variant) =
            Tool::parse(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        debug!(tool = name, "Calling tool");

        match tool {
            Tool::Hello => self.hello(name, variant, decode(name, arguments)?),
            Tool::Search => self.search(name, variant, &decode(name, arguments)?),
            Tool::Details => self.details(name, variant, decode(name, arguments)?),
            Tool::Itinerary => self.itinerary(name, variant, decode(name, arguments)?),
        }
    }

    fn planner(&self) -> Planner<'_> {
        Planner::new(&self.catalog, &self.config)
    }

    fn hello(&self, name: &str, variant: Variant, args: HelloArgs) -> Result<ToolResult, ToolError> {
        match variant {
            Variant::Text => Ok(ToolResult::text(markdown::hello(&args.name))),
            Variant::Ui => {
                let page = render(name, &HelloTemplate { name: &args.name })?;
                let url = format!("data:text/html;base64,{}", BASE64.encode(page));
                Ok(ToolResult::ui(
                    None,
                    UiResource::external_url(ui_uri("hello", &args.name), url),
                ))
            }
        }
    }

    fn search(
        &self,
        name: &str,
        variant: Variant,
        criteria: &SearchCriteria,
    ) -> Result<ToolResult, ToolError> {
        let found = self.planner().search(criteria);
        debug!(matches = found.len(), "Searched destinations");

        match variant {
            Variant::Text => Ok(ToolResult::text(markdown::search_results(&found))),
            Variant::Ui => {
                let heading = markdown::found_heading(found.len());
                let page = render(
                    name,
                    &DestinationListTemplate {
                        heading: heading.clone(),
                        destinations: found
                            .iter()
                            .map(|d| DestinationView::from_destination(d))
                            .collect(),
                    },
                )?;
                let summary = if found.is_empty() {
                    markdown::no_matches()
                } else {
                    heading
                };
                Ok(ToolResult::ui(
                    Some(summary),
                    UiResource::html(ui_uri("search", "results"), page),
                ))
            }
        }
    }

    fn details(&self, name: &str, variant: Variant, args: DetailsArgs) -> Result<ToolResult, ToolError> {
        let Some(destination) = self.planner().destination(&args.destination_id) else {
            return Ok(ToolResult::error(markdown::not_found(&args.destination_id)));
        };

        match variant {
            Variant::Text => Ok(ToolResult::text(markdown::destination_details(destination))),
            Variant::Ui => {
                let page = render(name, &DestinationDetailTemplate::from_destination(destination))?;
                Ok(ToolResult::ui(
                    Some(destination.display_name()),
                    UiResource::html(ui_uri("destination", &destination.id), page),
                ))
            }
        }
    }

    fn itinerary(
        &self,
        name: &str,
        variant: Variant,
        args: ItineraryArgs,
    ) -> Result<ToolResult, ToolError> {
        let request = args.into_request();
        let itinerary = match self.planner().build_itinerary(&request) {
            Ok(itinerary) => itinerary,
            Err(ItineraryError::NoValidDestinations) => {
                return Ok(ToolResult::error(markdown::no_valid_destinations()));
            }
        };

        match variant {
            Variant::Text => Ok(ToolResult::text(markdown::itinerary(&itinerary, &self.catalog))),
            Variant::Ui => {
                let page = render(
                    name,
                    &ItineraryTemplate::from_itinerary(&itinerary, &self.catalog),
                )?;
                let summary = format!(
                    "{} ({} total)",
                    itinerary.title,
                    markdown::money(itinerary.total_cost)
                );
                Ok(ToolResult::ui(
                    Some(summary),
                    UiResource::html(ui_uri("itinerary", &itinerary.destinations.join("-")), page),
                ))
            }
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

fn render(tool: &str, template: &impl Template) -> Result<String, ToolError> {
    template.render().map_err(|source| ToolError::Render {
        tool: tool.to_string(),
        source,
    })
}
