//! Map command implementation.
//!
//! Shows the matching facilities as map markers, with the bounds a map
//! should fit.

use pickleball_core_rs::{Directory, FilterCriteria, ViewMode, ViewSwitch};

use super::list::apply_criteria;
use super::{CommandContext, Result};
use crate::output::{format_map_json, format_map_table};

/// Executes the map command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext, criteria: FilterCriteria, directory: &mut Directory) -> Result<()> {
    if directory.switch_view(ViewMode::Map) == ViewSwitch::RefreshMap && ctx.verbose {
        eprintln!("Rendering map view");
    }

    let count = apply_criteria(ctx, criteria, directory);
    let view = directory.map_view(ctx.now, ctx.locale);

    if ctx.verbose && view.markers.len() < count {
        eprintln!(
            "{} matching facilities have no coordinates",
            count - view.markers.len()
        );
    }

    if ctx.json_output {
        let output = format_map_json(directory.criteria(), ctx.now, count, &view)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_map_table(&view, ctx.use_colors, ctx.locale);
        print!("{output}");
    }

    Ok(())
}
