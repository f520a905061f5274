//! JSON output formatting for weekplan.

use serde::Serialize;
use serde_json::json;

use crate::core::PlannedTask;
use crate::error::PlannerError;
use crate::features::schedule::ParsedTask;

/// Format stored tasks as JSON
///
/// # Errors
///
/// Returns `PlannerError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[PlannedTask], title: &str) -> Result<String, PlannerError> {
    let output = json!({
        "list": title,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a parsed (unsaved) batch as JSON
///
/// # Errors
///
/// Returns `PlannerError::Json` if serialization fails.
pub fn format_parsed_json(tasks: &[ParsedTask]) -> Result<String, PlannerError> {
    let output = json!({
        "stored": false,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PlannerError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PlannerError> {
    Ok(serde_json::to_string_pretty(value)?)
}
