//! Add command implementation.
//!
//! This module implements `weekplan add`: read schedule text, parse it, and
//! append the recognized tasks to storage.

use std::io::Read;
use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::config::Config;
use crate::core::{validate_week, PlannedTask, TaskStore};
use crate::error::PlannerError;
use crate::features::schedule::parse_schedule;
use crate::output::{format_parsed, format_tasks_pretty};

/// Execute the add command, reading stdin when no text or file is given.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is too large, if nothing
/// in it is recognized, or if storage fails.
pub fn add(
    store: &dyn TaskStore,
    args: AddArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let limit = config.parser.max_input_bytes;
    let text = match (args.text, args.file.as_deref()) {
        (Some(text), _) => check_size(text, limit)?,
        (None, Some(path)) => read_file(path, limit)?,
        (None, None) => read_bounded(std::io::stdin().lock(), limit)?,
    };
    plan(store, &text, args.week, args.parse_only, config, format)
}

/// Parse `text` and store the tasks under `week` (or the configured default).
///
/// With `parse_only` nothing is stored and the parsed batch is rendered.
///
/// # Errors
///
/// Returns `PlannerError::NothingRecognized` for an empty parse result,
/// `PlannerError::InvalidArgument` for an out-of-range week, or a storage
/// error.
pub fn plan(
    store: &dyn TaskStore,
    text: &str,
    week: Option<u8>,
    parse_only: bool,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let week = validate_week(week.unwrap_or(config.storage.default_week))?;
    let parsed = parse_schedule(text);

    if parsed.is_empty() {
        return Err(PlannerError::NothingRecognized);
    }

    if parse_only {
        return format_parsed(&parsed, format);
    }

    let now = Utc::now();
    let planned: Vec<PlannedTask> = parsed
        .into_iter()
        .map(|task| PlannedTask::from_parsed(task, week, now))
        .collect();
    store.append(&planned)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "stored": true,
                "week": week,
                "count": planned.len(),
                "items": planned,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} {}\n\n",
                "✓".green().bold(),
                format!("Generated {} tasks!", planned.len()).bold()
            );
            output.push_str(&format_tasks_pretty(&planned, &format!("Week {week}")));
            Ok(output)
        },
    }
}

fn check_size(text: String, limit: usize) -> Result<String, PlannerError> {
    if text.len() > limit {
        return Err(PlannerError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(text)
}

fn read_file(path: &Path, limit: usize) -> Result<String, PlannerError> {
    let size = std::fs::metadata(path)?.len();
    if size > limit as u64 {
        return Err(PlannerError::InputTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit,
        });
    }
    read_bounded(std::fs::File::open(path)?, limit)
}

/// Read at most `limit` bytes; one byte more is an error.
fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String, PlannerError> {
    let mut text = String::new();
    let bound = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(bound).read_to_string(&mut text)?;
    check_size(text, limit)
}
