//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/pb/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use directories::BaseDirs;
use pickleball_core_rs::Locale;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::cli::Cli;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Time zone used when the config does not name one.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Lisbon;

/// Dataset file used when neither flag, env nor config names one.
pub const DEFAULT_DATA_FILE: &str = "facilities.json";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Dataset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// Display language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// IANA time zone used for "now".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: None,
            locale: None,
            timezone: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/pb/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("pb"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("pb"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("PB_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    log::debug!("loaded config from {}", path.display());
    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema; later versions add their steps here.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Resolves the dataset path with priority: flag > env > config > default.
///
/// The flag and `PB_DATA` both arrive through `cli.data`.
pub fn resolve_data_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.data
        .clone()
        .or_else(|| config.data.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Parses an IANA time zone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| {
        CommandError::Config(format!(
            "Invalid timezone '{}'. Use an IANA name such as Europe/Lisbon",
            name
        ))
    })
}

/// Returns the configured time zone, or [`DEFAULT_TIMEZONE`].
pub fn configured_timezone(config: &Config) -> Result<Tz> {
    config
        .timezone
        .as_deref()
        .map_or(Ok(DEFAULT_TIMEZONE), parse_timezone)
}

/// Returns the current wall-clock time in the configured time zone.
pub fn local_now(config: &Config) -> Result<NaiveDateTime> {
    let tz = configured_timezone(config)?;
    Ok(Utc::now().with_timezone(&tz).naive_local())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref data) = config.data {
                println!("  data: {}", data.display());
            }
            if let Some(locale) = config.locale {
                println!("  locale: {}", locale);
            }
            if let Some(ref timezone) = config.timezone {
                println!("  timezone: {}", timezone);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
        } else {
            println!("(No config file exists. Run 'pb config set <KEY> <VALUE>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` setting to `config`, validating the value.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data" => {
            if value.trim().is_empty() {
                return Err(CommandError::Config("data path cannot be empty".to_string()));
            }
            config.data = Some(PathBuf::from(value));
        }
        "locale" => {
            let locale = value
                .parse::<Locale>()
                .map_err(|e| CommandError::Config(e.to_string()))?;
            config.locale = Some(locale);
        }
        "timezone" => {
            let tz = parse_timezone(value)?;
            config.timezone = Some(tz.name().to_string());
        }
        "output.color" => {
            config.output.color = Some(parse_bool(value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: data, locale, timezone, output.color",
                key
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
