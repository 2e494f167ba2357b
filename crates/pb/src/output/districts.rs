//! District output formatting.

use serde::Serialize;

use super::helpers::{format_header, truncate_str};
use crate::commands::districts::DistrictSummary;

/// JSON output structure for districts command.
#[derive(Serialize)]
pub struct DistrictsOutput<'a> {
    pub districts: &'a [DistrictSummary],
}

/// Formats districts as JSON.
pub fn format_districts_json(districts: &[DistrictSummary]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DistrictsOutput { districts })
}

/// Formats districts as a table.
pub fn format_districts_table(districts: &[DistrictSummary], use_colors: bool) -> String {
    if districts.is_empty() {
        return "No districts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format_header(
        &format!("{:<24} {:>10}", "District", "Facilities"),
        use_colors,
    ));

    for district in districts {
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            truncate_str(&district.name, 24),
            district.facilities
        ));
    }

    output
}
