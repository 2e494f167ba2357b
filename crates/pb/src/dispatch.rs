//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need the facilities dataset, so that
//! `pb config` and `pb completions` work before any data file exists.

use pickleball_core_rs::Directory;

use crate::cli::{Cli, Commands, ConfigCommands, FilterArgs, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without the dataset.
pub trait NoDataCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the facility directory.
pub trait DataCommand {
    /// Execute the command against the loaded directory.
    fn execute(&self, ctx: &CommandContext, directory: &mut Directory) -> Result<()>;
}

/// Commands that don't need the dataset.
pub enum NoDataDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> NoDataDispatch<'a> {
    /// Try to create a no-data dispatch from the CLI command.
    /// Returns None if the command needs the dataset.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoDataCommand for NoDataDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("pb - Pickleball facility directory");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that need the dataset.
pub enum DataDispatch<'a> {
    List(&'a FilterArgs),
    Map(&'a FilterArgs),
    Show { name: &'a str },
    Districts,
}

impl<'a> DataDispatch<'a> {
    /// Create a data dispatch from the CLI command.
    /// Returns None if the command runs without the dataset.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List { filters }) => Some(Self::List(filters)),
            Some(Commands::Map { filters }) => Some(Self::Map(filters)),
            Some(Commands::Show { name }) => Some(Self::Show { name }),
            Some(Commands::Districts) => Some(Self::Districts),
            _ => None,
        }
    }
}

impl DataCommand for DataDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, directory: &mut Directory) -> Result<()> {
        match self {
            Self::List(filters) => commands::list::execute(ctx, filters.to_criteria(), directory),
            Self::Map(filters) => commands::map::execute(ctx, filters.to_criteria(), directory),
            Self::Show { name } => commands::show::execute(ctx, name, directory),
            Self::Districts => commands::districts::execute(ctx, directory),
        }
    }
}
