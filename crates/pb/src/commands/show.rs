//! Show command implementation.
//!
//! Shows one facility with its weekly hours and services.

use pickleball_core_rs::view::FacilityCard;
use pickleball_core_rs::Directory;

use super::{CommandContext, Result};
use crate::output::{format_card_details, format_card_json};

/// Executes the show command.
///
/// # Errors
///
/// Returns a lookup error if no single facility matches `name`.
pub fn execute(ctx: &CommandContext, name: &str, directory: &Directory) -> Result<()> {
    let facility = directory.find_by_name(name)?;

    if ctx.verbose {
        eprintln!("Found '{}'", facility.name);
    }

    let card = FacilityCard::build(facility, ctx.now, ctx.locale);

    if ctx.json_output {
        let output = format_card_json(&card)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_card_details(&card, ctx.use_colors, ctx.locale);
        print!("{output}");
    }

    Ok(())
}
