//! Persisted task records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::DayLabel;
use crate::error::PlannerError;
use crate::features::schedule::ParsedTask;

/// Weeks a monthly plan is split into.
pub const WEEKS_PER_MONTH: u8 = 5;

/// Progress of a planned task.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Being worked on.
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    /// Done.
    #[value(alias = "done")]
    Completed,
}

impl TaskStatus {
    /// Status icon used in pretty output.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pending => "⏳",
            Self::InProgress => "🚧",
            Self::Completed => "✅",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        })
    }
}

impl FromStr for TaskStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(PlannerError::InvalidArgument(format!(
                "unknown status '{other}'"
            ))),
        }
    }
}

/// Editable text fields of a task.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    /// The time or time range.
    Time,
    /// The task description.
    Task,
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Time => "time",
            Self::Task => "task",
        })
    }
}

/// A task as stored by a [`TaskStore`](super::TaskStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTask {
    /// Identifier assigned at parse time.
    pub id: String,
    /// Day the task belongs to.
    pub day: DayLabel,
    /// Time or time range as written by the user.
    #[serde(default)]
    pub time: String,
    /// Task description.
    pub task: String,
    /// Progress.
    #[serde(default)]
    pub status: TaskStatus,
    /// Week of the month (1-based) the plan was added to.
    #[serde(default = "default_week")]
    pub week: u8,
    /// When the task was stored.
    pub created_at: DateTime<Utc>,
}

const fn default_week() -> u8 {
    1
}

impl PlannedTask {
    /// Turn a freshly parsed task into a pending record for `week`.
    #[must_use]
    pub fn from_parsed(parsed: ParsedTask, week: u8, created_at: DateTime<Utc>) -> Self {
        Self {
            id: parsed.id,
            day: parsed.day,
            time: parsed.time,
            task: parsed.task,
            status: TaskStatus::Pending,
            week,
            created_at,
        }
    }

    /// Set one of the editable fields.
    pub fn set_field(&mut self, field: TaskField, value: &str) {
        match field {
            TaskField::Time => self.time = value.to_string(),
            TaskField::Task => self.task = value.to_string(),
        }
    }
}

/// Check that a week number is within `1..=WEEKS_PER_MONTH`.
///
/// # Errors
///
/// Returns `PlannerError::InvalidArgument` when out of range.
pub fn validate_week(week: u8) -> Result<u8, PlannerError> {
    if (1..=WEEKS_PER_MONTH).contains(&week) {
        Ok(week)
    } else {
        Err(PlannerError::InvalidArgument(format!(
            "week must be between 1 and {WEEKS_PER_MONTH}, got {week}"
        )))
    }
}

/// Group tasks by day, keeping days in order of first appearance and tasks
/// in their original order within each day.
#[must_use]
pub fn group_by_day<'a, T, F>(tasks: &'a [T], day_of: F) -> Vec<(&'a DayLabel, Vec<&'a T>)>
where
    F: Fn(&'a T) -> &'a DayLabel,
{
    let mut groups: Vec<(&DayLabel, Vec<&T>)> = Vec::new();
    for task in tasks {
        let day = day_of(task);
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, members)) => members.push(task),
            None => groups.push((day, vec![task])),
        }
    }
    groups
}
