use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, resolve_data_path, Config};
use commands::{CommandContext, CommandError};
use dispatch::{DataCommand, DataDispatch, NoDataCommand, NoDataDispatch};
use pickleball_core_rs::Directory;
use pickleball_data_rs::Dataset;

fn main() -> ExitCode {
    sensible_env_logger::init!();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", format_error_json(&e));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    // Config and completions must keep working when the config file is broken.
    if let Some(dispatch) = NoDataDispatch::try_from_cli(cli) {
        let ctx = CommandContext::new(cli, &Config::default())?;
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    let ctx = CommandContext::new(cli, &config)?;

    let Some(dispatch) = DataDispatch::from_cli(cli) else {
        return Ok(());
    };

    let path = resolve_data_path(cli, &config);
    log::debug!("loading facilities from {}", path.display());
    let dataset = Dataset::load(&path)?;
    if ctx.verbose {
        eprintln!("Loaded {} facilities from {}", dataset.len(), path.display());
    }

    let mut directory = Directory::from(dataset);
    dispatch.execute(&ctx, &mut directory)
}

/// Formats an error as the JSON error object.
fn format_error_json(e: &CommandError) -> String {
    let error_json = serde_json::json!({
        "error": {
            "code": error_code(e),
            "message": e.to_string(),
        }
    });
    serde_json::to_string_pretty(&error_json).unwrap_or_else(|_| error_json.to_string())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Dataset(_) => "DATASET_ERROR",
        CommandError::Lookup(_) => "LOOKUP_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Dataset(err) => err.exit_code(),
        CommandError::Lookup(_) => 1,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
