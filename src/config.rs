//! Application configuration module
//!
//! This module centralizes the viewer settings using `confy` for automatic
//! serialization and OS-specific config directory management.

use crate::constant::{
    APP_NAME, DEFAULT_ADD_CLOSE, DEFAULT_ADD_OPEN, DEFAULT_LOG_LEVEL, DEFAULT_REMOVE_CLOSE,
    DEFAULT_REMOVE_OPEN,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

/// Settings to run with, the log level to install, and whatever went wrong
/// while reading them
///
/// Built before any subscriber exists, so problems are kept for the caller
/// to log once tracing is up.
#[derive(Debug)]
pub struct Startup {
    pub settings: Settings,
    pub level: tracing::Level,
    pub problems: Vec<ConfigError>,
}

impl Startup {
    pub fn resolve(loaded: Result<Config, ConfigError>) -> Self {
        let mut problems = Vec::new();
        let settings = match loaded {
            Ok(config) => config.settings,
            Err(e) => {
                problems.push(e);
                Settings::default()
            }
        };
        let level = settings.tracing_level().unwrap_or_else(|e| {
            problems.push(e);
            tracing::Level::WARN
        });

        Self {
            settings,
            level,
            problems,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    #[default]
    Words,
    Lines,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Output format used when no flag is given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Diff granularity used when no flag is given
    #[serde(default)]
    pub mode: DiffMode,

    /// Always append the statistics line
    #[serde(default)]
    pub show_stats: bool,

    /// Maximum level written to stderr (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline markers for plain output
    #[serde(default)]
    pub markers: Markers,
}

impl Settings {
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            mode: DiffMode::default(),
            show_stats: false,
            log_level: default_log_level(),
            markers: Markers::default(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_add_open")]
    pub add_open: String,

    #[serde(default = "default_add_close")]
    pub add_close: String,

    #[serde(default = "default_remove_open")]
    pub remove_open: String,

    #[serde(default = "default_remove_close")]
    pub remove_close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            add_open: default_add_open(),
            add_close: default_add_close(),
            remove_open: default_remove_open(),
            remove_close: default_remove_close(),
        }
    }
}

fn default_add_open() -> String {
    DEFAULT_ADD_OPEN.to_string()
}

fn default_add_close() -> String {
    DEFAULT_ADD_CLOSE.to_string()
}

fn default_remove_open() -> String {
    DEFAULT_REMOVE_OPEN.to_string()
}

fn default_remove_close() -> String {
    DEFAULT_REMOVE_CLOSE.to_string()
}
