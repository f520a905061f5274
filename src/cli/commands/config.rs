//! Config command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PlannerError;

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or saved.
pub fn config(
    command: ConfigCommands,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Pretty => serde_yaml::to_string(config)
                .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {e}"))),
        },

        ConfigCommands::Path => match format {
            OutputFormat::Json => {
                let output = json!({
                    "root": paths.root,
                    "config": paths.config_file,
                    "tasks_json": paths.tasks_json,
                    "database": paths.database,
                });
                Ok(serde_json::to_string_pretty(&output)?)
            },
            OutputFormat::Pretty => Ok(format!(
                "{}    {}\n{}  {}\n{}   {}\n{} {}",
                "Data:".cyan(),
                paths.root.display(),
                "Config:".cyan(),
                paths.config_file.display(),
                "Tasks:".cyan(),
                paths.tasks_json.display(),
                "SQLite:".cyan(),
                paths.database.display()
            )),
        },

        ConfigCommands::Backend { backend } => {
            let mut updated = config.clone();
            updated.storage.backend = backend;
            paths.ensure_dirs()?;
            updated.save_to_path(&paths.config_file)?;
            log::info!("Storage backend set to {backend}");

            match format {
                OutputFormat::Json => {
                    let output = json!({ "backend": backend.to_string() });
                    Ok(serde_json::to_string_pretty(&output)?)
                },
                OutputFormat::Pretty => Ok(format!(
                    "{} Storage backend is now {}",
                    "✓".green().bold(),
                    backend.to_string().bold()
                )),
            }
        },
    }
}
