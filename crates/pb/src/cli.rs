//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pb CLI.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pickleball_core_rs::{CourtClass, FilterCriteria, Locale, Status};

/// Accepted formats for `--at`.
const INSTANT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// pb - Find pickleball facilities and see which are open now
#[derive(Parser, Debug)]
#[command(name = "pb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show progress and extra columns)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Facilities dataset (default: from config, then ./facilities.json)
    #[arg(long, global = true, env = "PB_DATA")]
    pub data: Option<PathBuf>,

    /// Display language (pt or en)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Evaluate opening status at this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_parser = parse_instant)]
    pub at: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List facilities
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show facilities as map markers
    #[command(alias = "m")]
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show facility details and weekly hours
    #[command(alias = "s")]
    Show {
        /// Facility name (case-insensitive, partial names accepted)
        name: String,
    },

    /// List districts with their facility counts
    #[command(alias = "d")]
    Districts,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filters shared by the list and map commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search name, district, services and address
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this district (exact name)
    #[arg(short, long)]
    pub district: Option<String>,

    /// Court count: 1, 2 (exactly) or 4, 8 (at least)
    #[arg(short, long)]
    pub courts: Option<CourtClass>,

    /// Opening status at the evaluation time (open, closed, unknown)
    #[arg(long)]
    pub status: Option<Status>,
}

impl FilterArgs {
    /// Converts the flags into filter criteria.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            courts: self.courts,
            status: self.status,
            ..FilterCriteria::default()
        }
        .with_search(self.search.clone().unwrap_or_default())
        .with_district(self.district.clone().unwrap_or_default())
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s.trim(), format).ok())
        .ok_or_else(|| format!("invalid time '{s}', expected YYYY-MM-DDTHH:MM"))
}
