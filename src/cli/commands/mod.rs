//! Command implementations for weekplan.
//!
//! Handlers return the text to print; `main` does the printing.

mod add;
mod config;
mod shell;

pub use add::{add, plan};
pub use config::config;
pub use shell::completions;

use std::collections::BTreeMap;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::core::{validate_week, DayLabel, PlannedTask, TaskField, TaskStatus, TaskStore};
use crate::error::PlannerError;
use crate::output::{format_task, format_tasks, format_tasks_pretty};

/// Execute the list command
///
/// Without `--week` every week is shown, one section per week.
///
/// # Errors
///
/// Returns an error if the week is out of range, storage cannot be read,
/// or output formatting fails.
pub fn list(
    store: &dyn TaskStore,
    week: Option<u8>,
    day: Option<&str>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let week = week.map(validate_week).transpose()?;
    let day = day.map(|d| DayLabel::from(d.to_string()));

    let mut tasks = store.load_all()?;
    tasks.retain(|task| {
        week.map_or(true, |w| task.week == w)
            && day.as_ref().map_or(true, |d| same_day(&task.day, d))
    });

    let mut title = week.map_or_else(|| "All weeks".to_string(), |w| format!("Week {w}"));
    if let Some(day) = &day {
        title = format!("{title} · {day}");
    }

    if week.is_some() || format == OutputFormat::Json || tasks.is_empty() {
        return format_tasks(&tasks, &title, format);
    }

    let mut by_week: BTreeMap<u8, Vec<PlannedTask>> = BTreeMap::new();
    for task in tasks {
        by_week.entry(task.week).or_default().push(task);
    }
    let sections: Vec<String> = by_week
        .iter()
        .map(|(week, tasks)| format_tasks_pretty(tasks, &format!("Week {week}")))
        .collect();
    Ok(sections.join("\n"))
}

/// Day labels match exactly, or case-insensitively for free-form names.
fn same_day(stored: &DayLabel, wanted: &DayLabel) -> bool {
    match (stored, wanted) {
        (DayLabel::Named(a), DayLabel::Named(b)) => a.eq_ignore_ascii_case(b),
        _ => stored == wanted,
    }
}

/// Execute the status command
///
/// # Errors
///
/// Returns `PlannerError::NotFound` for an unknown id, or a storage error.
pub fn status(
    store: &dyn TaskStore,
    id: &str,
    status: TaskStatus,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    store.update_status(id, status)?;

    match format {
        OutputFormat::Json => {
            let output = json!({ "id": id, "status": status });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => Ok(format!("{} Task {} is now {status}", status.icon(), id.dimmed())),
    }
}

/// Execute the edit command
///
/// # Errors
///
/// Returns `PlannerError::InvalidArgument` when neither field is given,
/// `PlannerError::NotFound` for an unknown id, or a storage error.
pub fn edit(
    store: &dyn TaskStore,
    id: &str,
    time: Option<&str>,
    task: Option<&str>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    if time.is_none() && task.is_none() {
        return Err(PlannerError::InvalidArgument(
            "nothing to edit, pass --time and/or --task".to_string(),
        ));
    }
    if task.is_some_and(|t| t.trim().is_empty()) {
        return Err(PlannerError::InvalidArgument("task text cannot be empty".to_string()));
    }

    if let Some(time) = time {
        store.update_field(id, TaskField::Time, time.trim())?;
    }
    if let Some(task) = task {
        store.update_field(id, TaskField::Task, task.trim())?;
    }

    let updated = store
        .get(id)?
        .ok_or_else(|| PlannerError::NotFound(format!("Task '{id}'")))?;
    format_task(&updated, format)
}

/// Execute the delete command
///
/// # Errors
///
/// Returns `PlannerError::NotFound` for an unknown id, or a storage error.
pub fn delete(store: &dyn TaskStore, id: &str, format: OutputFormat) -> Result<String, PlannerError> {
    store.delete(id)?;

    match format {
        OutputFormat::Json => {
            let output = json!({ "id": id, "deleted": true });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => Ok(format!("{} Deleted task {}", "✗".red(), id.dimmed())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockTaskStore;
    use chrono::{TimeZone, Utc, Weekday};

    fn make_task(id: &str, day: DayLabel, week: u8) -> PlannedTask {
        PlannedTask {
            id: id.to_string(),
            day,
            time: "9am".to_string(),
            task: format!("Task {id}"),
            status: TaskStatus::Pending,
            week,
            created_at: Utc.with_ymd_and_hms(2026, 4, 6, 9, 0, 0).unwrap(),
        }
    }

    fn stored() -> Vec<PlannedTask> {
        vec![
            make_task("a", DayLabel::Weekday(Weekday::Mon), 1),
            make_task("b", DayLabel::Ordinal(2), 2),
            make_task("c", DayLabel::Named("Weekend".to_string()), 1),
            make_task("d", DayLabel::Weekday(Weekday::Mon), 2),
        ]
    }

    fn store_with_tasks() -> MockTaskStore {
        let mut store = MockTaskStore::new();
        store.expect_load_all().returning(|| Ok(stored()));
        store
    }

    #[test]
    fn test_list_filters_by_week() {
        let output = list(&store_with_tasks(), Some(2), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["list"], "Week 2");
        assert_eq!(value["count"], 2);
        assert_eq!(value["items"][0]["id"], "b");
        assert_eq!(value["items"][1]["id"], "d");
    }

    #[test]
    fn test_list_filters_by_day_any_case() {
        let output = list(&store_with_tasks(), None, Some("monday"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);

        let output = list(&store_with_tasks(), None, Some("WEEKEND"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["id"], "c");
    }

    #[test]
    fn test_list_all_weeks_pretty_has_sections() {
        let output = list(&store_with_tasks(), None, None, OutputFormat::Pretty).unwrap();

        let week1 = output.find("Week 1").unwrap();
        let week2 = output.find("Week 2").unwrap();
        assert!(week1 < week2);
        assert!(output.contains("Weekend"));
        assert!(output.contains("Day 2"));
    }

    #[test]
    fn test_list_empty() {
        let mut store = MockTaskStore::new();
        store.expect_load_all().returning(|| Ok(Vec::new()));

        let output = list(&store, None, None, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn test_list_rejects_bad_week() {
        let mut store = MockTaskStore::new();
        store.expect_load_all().never();

        assert!(matches!(
            list(&store, Some(0), None, OutputFormat::Pretty),
            Err(PlannerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_status_updates_store() {
        let mut store = MockTaskStore::new();
        store
            .expect_update_status()
            .withf(|id, status| id == "a" && *status == TaskStatus::Completed)
            .times(1)
            .returning(|_, _| Ok(()));

        let output = status(&store, "a", TaskStatus::Completed, OutputFormat::Json).unwrap();
        assert!(output.contains("\"status\": \"completed\""));
    }

    #[test]
    fn test_status_unknown_id() {
        let mut store = MockTaskStore::new();
        store
            .expect_update_status()
            .returning(|id, _| Err(PlannerError::NotFound(format!("Task '{id}'"))));

        let err = status(&store, "zzz", TaskStatus::Pending, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, PlannerError::NotFound(_)));
    }

    #[test]
    fn test_edit_requires_a_field() {
        let mut store = MockTaskStore::new();
        store.expect_update_field().never();

        let err = edit(&store, "a", None, None, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_edit_rejects_blank_task() {
        let mut store = MockTaskStore::new();
        store.expect_update_field().never();

        let err = edit(&store, "a", None, Some("   "), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_edit_updates_both_fields() {
        let mut store = MockTaskStore::new();
        store
            .expect_update_field()
            .withf(|id, field, value| id == "a" && *field == TaskField::Time && value == "10am")
            .times(1)
            .returning(|_, _, _| Ok(()));
        store
            .expect_update_field()
            .withf(|id, field, value| id == "a" && *field == TaskField::Task && value == "Gym")
            .times(1)
            .returning(|_, _, _| Ok(()));
        store.expect_get().returning(|_| {
            let mut task = make_task("a", DayLabel::Weekday(Weekday::Mon), 1);
            task.time = "10am".to_string();
            task.task = "Gym".to_string();
            Ok(Some(task))
        });

        let output = edit(&store, "a", Some("10am"), Some(" Gym "), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["time"], "10am");
        assert_eq!(value["task"], "Gym");
    }

    #[test]
    fn test_delete() {
        let mut store = MockTaskStore::new();
        store
            .expect_delete()
            .withf(|id| id == "b")
            .times(1)
            .returning(|_| Ok(()));

        let output = delete(&store, "b", OutputFormat::Pretty).unwrap();
        assert!(output.contains("Deleted task"));
    }
}
