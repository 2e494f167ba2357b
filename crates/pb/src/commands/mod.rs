//! Command implementations for the pb CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod districts;
pub mod list;
pub mod map;
pub mod show;

use chrono::NaiveDateTime;
use pickleball_core_rs::Locale;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Dataset could not be loaded.
    #[error("dataset error: {0}")]
    Dataset(#[from] pickleball_data_rs::DatasetError),

    /// Facility name lookup failed.
    #[error("{0}")]
    Lookup(#[from] pickleball_core_rs::LookupError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Display language.
    pub locale: Locale,
    /// Local time used for every status evaluation in this run.
    pub now: NaiveDateTime,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Flags win over config values. `now` is `--at` when given, otherwise the
    /// wall clock in the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns a config error if the configured time zone is not a valid IANA name.
    pub fn new(cli: &Cli, config: &Config) -> Result<Self> {
        let now = match cli.at {
            Some(at) => at,
            None => config::local_now(config)?,
        };

        Ok(Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color != Some(false),
            quiet: cli.quiet,
            verbose: cli.verbose,
            locale: cli.locale.or(config.locale).unwrap_or_default(),
            now,
        })
    }
}
