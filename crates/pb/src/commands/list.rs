//! List command implementation.
//!
//! Lists the facilities that match the filter flags at the evaluation time.

use pickleball_core_rs::{Directory, FilterCriteria};

use super::{CommandContext, Result};
use crate::output::{format_facilities_json, format_facilities_table};

/// Executes the list command.
///
/// # Arguments
///
/// * `ctx` - Command context with output settings
/// * `criteria` - Filters built from the command flags
/// * `directory` - The loaded facility directory
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext, criteria: FilterCriteria, directory: &mut Directory) -> Result<()> {
    apply_criteria(ctx, criteria, directory);
    let cards = directory.cards(ctx.now, ctx.locale);

    if ctx.json_output {
        let output = format_facilities_json(directory.criteria(), ctx.now, &cards)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_facilities_table(&cards, ctx.verbose, ctx.use_colors, ctx.locale);
        print!("{output}");
    }

    Ok(())
}

/// Records `criteria` on the directory and recomputes its result set.
///
/// Returns the number of matching facilities.
pub(crate) fn apply_criteria(
    ctx: &CommandContext,
    criteria: FilterCriteria,
    directory: &mut Directory,
) -> usize {
    directory.set_criteria(criteria);
    let count = directory.apply_filters(ctx.now);

    if ctx.verbose {
        eprintln!(
            "{} of {} facilities match at {}",
            count,
            directory.facilities().len(),
            ctx.now.format("%Y-%m-%d %H:%M")
        );
    }

    count
}
