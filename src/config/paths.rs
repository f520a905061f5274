//! Path resolution for weekplan configuration and data files.
//!
//! All weekplan data is stored in `~/.weekplan/` unless `$WEEKPLAN_HOME`
//! points elsewhere:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - Task list for the JSON backend
//! - `weekplan.db` - `SQLite` database for the sqlite backend

use std::path::PathBuf;

use crate::error::PlannerError;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "WEEKPLAN_HOME";

/// Paths to weekplan configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.weekplan/`
    pub root: PathBuf,
    /// Config file: `~/.weekplan/config.yaml`
    pub config_file: PathBuf,
    /// JSON task list: `~/.weekplan/tasks.json`
    pub tasks_json: PathBuf,
    /// Database file: `~/.weekplan/weekplan.db`
    pub database: PathBuf,
}

impl Paths {
    /// Resolve paths from `$WEEKPLAN_HOME`, falling back to `$HOME/.weekplan`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, PlannerError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            PlannerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".weekplan")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_json: root.join("tasks.json"),
            database: root.join("weekplan.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PlannerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PlannerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".weekplan"))
        })
    }
}
