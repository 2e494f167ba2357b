//! Map marker output formatting.

use chrono::NaiveDateTime;
use pickleball_core_rs::view::MapView;
use pickleball_core_rs::{FilterCriteria, Locale};
use serde::Serialize;

use super::helpers::{format_degrees, format_header, format_status, truncate_str};

/// JSON output structure for map command.
#[derive(Serialize)]
pub struct MapOutput<'a> {
    pub criteria: &'a FilterCriteria,
    pub evaluated_at: NaiveDateTime,
    /// Facilities in the result set, including those without a marker.
    pub count: usize,
    #[serde(flatten)]
    pub view: &'a MapView,
}

/// Formats the map view as JSON.
pub fn format_map_json(
    criteria: &FilterCriteria,
    evaluated_at: NaiveDateTime,
    count: usize,
    view: &MapView,
) -> Result<String, serde_json::Error> {
    let output = MapOutput {
        criteria,
        evaluated_at,
        count,
        view,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the map view as a marker table with its framing.
pub fn format_map_table(view: &MapView, use_colors: bool, locale: Locale) -> String {
    let mut output = String::new();

    if view.markers.is_empty() {
        output.push_str("No markers to show.\n");
    } else {
        let header = format!("{:<32} {:>9} {:>9} Status", "Name", "Lat", "Lng");
        output.push_str(&format_header(&header, use_colors));

        for marker in &view.markers {
            output.push_str(&format!(
                "{:<32} {:>9} {:>9} {}\n",
                truncate_str(&marker.name, 32),
                format_degrees(marker.latitude),
                format_degrees(marker.longitude),
                format_status(marker.status, locale, use_colors)
            ));
        }
    }

    output.push('\n');
    match view.bounds {
        Some(bounds) => output.push_str(&format!(
            "Fit {},{} to {},{} (max zoom {})\n",
            format_degrees(bounds.south_west.latitude),
            format_degrees(bounds.south_west.longitude),
            format_degrees(bounds.north_east.latitude),
            format_degrees(bounds.north_east.longitude),
            view.zoom
        )),
        None => output.push_str(&format!(
            "Default view {},{} zoom {}\n",
            format_degrees(view.center.latitude),
            format_degrees(view.center.longitude),
            view.zoom
        )),
    }

    output
}
