//! Configuration management for weekplan.
//!
//! This module handles loading and saving configuration from `~/.weekplan/`
//! (or `$WEEKPLAN_HOME`).

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    ColorSetting, Config, GeneralConfig, LogLevel, ParserConfig, StorageBackend, StorageConfig,
};
