//! Districts command implementation.
//!
//! Lists the districts of the dataset with their facility counts.

use pickleball_core_rs::Directory;
use serde::Serialize;

use super::{CommandContext, Result};
use crate::output::{format_districts_json, format_districts_table};

/// A district and how many facilities it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictSummary {
    pub name: String,
    pub facilities: usize,
}

/// Returns the sorted districts of the full collection with their counts.
pub fn district_summaries(directory: &Directory) -> Vec<DistrictSummary> {
    directory
        .districts()
        .into_iter()
        .map(|name| DistrictSummary {
            name: name.to_string(),
            facilities: directory
                .facilities()
                .iter()
                .filter(|f| f.district == name)
                .count(),
        })
        .collect()
}

/// Executes the districts command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext, directory: &Directory) -> Result<()> {
    let summaries = district_summaries(directory);

    if ctx.json_output {
        let output = format_districts_json(&summaries)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_districts_table(&summaries, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
