//! Markdown rendering for the text variants of the tools.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::domain::{Destination, Itinerary};

/// Whole-unit dollar amount, e.g. `$180`.
pub fn money(amount: f64) -> String {
    format!("${amount:.0}")
}

pub fn hello(name: &str) -> String {
    format!("Hello, {name}! This is a plain text response from MCP.")
}

pub fn no_matches() -> String {
    "No destinations found matching your criteria.".to_string()
}

pub fn not_found(id: &str) -> String {
    format!("Destination '{id}' not found. Use search_destinations to find valid destination ids.")
}

pub fn no_valid_destinations() -> String {
    "Error: No valid destinations found. Use search_destinations to find valid destination ids."
        .to_string()
}

/// "Found 3 destinations" heading shared by text and UI variants.
pub fn found_heading(count: usize) -> String {
    match count {
        1 => "Found 1 destination".to_string(),
        n => format!("Found {n} destinations"),
    }
}

/// Numbered list of search results.
pub fn search_results(found: &[&Destination]) -> String {
    if found.is_empty() {
        return no_matches();
    }

    let mut out = format!("{}:\n", found_heading(found.len()));
    for (i, d) in found.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. **{}** (`{}`)\n   {} · {} · {} · about {}/day · rating {:.1}/5\n   {}\n",
            i + 1,
            d.display_name(),
            d.id,
            d.kind,
            d.climate,
            d.budget_level.symbol(),
            money(d.average_daily_cost),
            d.rating,
            d.description,
        );
    }
    out
}

/// Full description of one destination.
pub fn destination_details(d: &Destination) -> String {
    let mut out = format!("# {}\n\n{}\n\n", d.display_name(), d.description);

    let _ = writeln!(out, "- **Type:** {}", d.kind);
    let _ = writeln!(out, "- **Climate:** {}", d.climate);
    let _ = writeln!(
        out,
        "- **Budget:** {} ({}), about {} per day",
        d.budget_level,
        d.budget_level.symbol(),
        money(d.average_daily_cost)
    );
    let _ = writeln!(
        out,
        "- **Rating:** {:.1}/5 (popularity {}/100)",
        d.rating, d.popularity_score
    );
    let _ = writeln!(out, "- **Typical stay:** {} days", d.average_stay_days);
    let _ = writeln!(
        out,
        "- **Best time to visit:** {}",
        d.best_time_to_visit.join(", ")
    );
    let _ = writeln!(out, "- **Main airport:** {}", d.main_airport);

    out.push_str("\n## Top attractions\n");
    for attraction in &d.top_attractions {
        let _ = writeln!(out, "- {attraction}");
    }

    out.push_str("\n## Things to do\n");
    for activity in &d.activities {
        let _ = writeln!(out, "- {activity}");
    }
    out
}

/// Day-by-day itinerary. Destination names are looked up in `catalog`.
pub fn itinerary(itinerary: &Itinerary, catalog: &Catalog) -> String {
    let prefs = &itinerary.preferences;
    let mut out = format!("# {}\n\n", itinerary.title);

    let _ = write!(out, "**Pace:** {}", prefs.pace);
    if !prefs.interests.is_empty() {
        let _ = write!(out, " · **Interests:** {}", prefs.interests.join(", "));
    }
    let _ = writeln!(out, " · **Total cost:** {}", money(itinerary.total_cost));
    if let Some(budget) = prefs.budget_per_day {
        let verdict = if itinerary.exceeds_budget() {
            "some days go over it"
        } else {
            "every day fits"
        };
        let _ = writeln!(out, "**Budget:** {}/day, {}", money(budget), verdict);
    }

    for day in &itinerary.days {
        let name = catalog
            .get_by_id(&day.destination)
            .map_or(day.destination.as_str(), |d| d.name.as_str());

        let _ = write!(out, "\n## Day {}: {}", day.day, name);
        if let Some(date) = day.date {
            let _ = write!(out, " ({date})");
        }
        out.push('\n');

        if let Some(note) = &day.notes {
            let _ = writeln!(out, "_{note}_");
        }
        for a in &day.activities {
            let _ = writeln!(
                out,
                "- {}: {} ({}h, {})",
                a.time_of_day.label(),
                a.name,
                a.duration_hours,
                money(a.cost)
            );
        }
        let _ = writeln!(out, "Day cost: {}", money(day.total_cost));
    }
    out
}
