//! Configuration settings for weekplan.
//!
//! Settings are loaded from `config.yaml` in the data directory (see
//! [`crate::config::Paths`]).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::core::WEEKS_PER_MONTH;
use crate::error::PlannerError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Where tasks are kept.
    pub storage: StorageConfig,
    /// Schedule parser limits.
    pub parser: ParserConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log level used when no `-v` flag is given.
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to all colored output of the process.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Parser decisions and storage details.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Raise the level by `steps` (one per `-v` flag), saturating at trace.
    #[must_use]
    pub const fn raised_by(self, steps: u8) -> Self {
        let base = self as u8;
        match base.saturating_add(steps) {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// The matching `log` filter.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Storage backend choice.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A single JSON file.
    #[default]
    Json,
    /// A `SQLite` database.
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        })
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Which backend keeps the tasks.
    pub backend: StorageBackend,
    /// Week new plans are added to when `--week` is not given.
    #[serde(default = "default_week")]
    pub default_week: u8,
}

/// Schedule parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Largest schedule text accepted, in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_week() -> u8 {
    1
}

const fn default_max_input_bytes() -> usize {
    1024 * 1024
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            default_week: default_week(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PlannerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Config` describing the first bad value.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if !(1..=WEEKS_PER_MONTH).contains(&self.storage.default_week) {
            return Err(PlannerError::Config(format!(
                "storage.default_week must be between 1 and {WEEKS_PER_MONTH}, got {}",
                self.storage.default_week
            )));
        }
        if self.parser.max_input_bytes == 0 {
            return Err(PlannerError::Config(
                "parser.max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PlannerError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
