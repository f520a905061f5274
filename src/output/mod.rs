//! Output formatting for weekplan.
//!
//! Pretty (colored, grouped by day) and JSON renderings of task lists.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::PlannedTask;
use crate::error::PlannerError;
use crate::features::schedule::ParsedTask;

pub use json::*;
pub use pretty::*;

/// Format stored tasks based on output format
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[PlannedTask],
    title: &str,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a parsed batch based on output format
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_parsed(tasks: &[ParsedTask], format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(tasks)),
        OutputFormat::Json => format_parsed_json(tasks),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `PlannerError::Json` if JSON serialization fails.
pub fn format_task(task: &PlannedTask, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => to_json(task),
    }
}
