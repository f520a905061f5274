use colored::Colorize;

use crate::core::{group_by_day, PlannedTask, TaskStatus};
use crate::features::schedule::ParsedTask;

/// Width of the rule under list titles.
const RULE_WIDTH: usize = 60;

fn status_marker(status: TaskStatus) -> String {
    let icon = status.icon();
    match status {
        TaskStatus::Pending => icon.white().to_string(),
        TaskStatus::InProgress => icon.yellow().to_string(),
        TaskStatus::Completed => icon.green().to_string(),
    }
}

fn time_column(time: &str) -> String {
    if time.is_empty() {
        format!("{:<18}", "—").dimmed().to_string()
    } else {
        format!("{time:<18}").cyan().to_string()
    }
}

/// Format stored tasks grouped by day
pub fn format_tasks_pretty(tasks: &[PlannedTask], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 tasks)\n  No tasks. Add some with `weekplan add`.");
    }

    let mut output = format!("{} ({} tasks)\n", title.bold(), tasks.len());
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for (day, members) in group_by_day(tasks, |t| &t.day) {
        output.push_str(&format!("{}\n", day.to_string().bold().underline()));
        for task in members {
            let text = match task.status {
                TaskStatus::Completed => task.task.strikethrough().to_string(),
                _ => task.task.clone(),
            };
            output.push_str(&format!(
                "  {} {} {}  {}\n",
                status_marker(task.status),
                time_column(&task.time),
                text,
                short_id(&task.id).dimmed()
            ));
        }
    }

    output
}

/// Format a freshly parsed batch (not yet stored)
pub fn format_parsed_pretty(tasks: &[ParsedTask]) -> String {
    if tasks.is_empty() {
        return "Parsed 0 tasks".to_string();
    }

    let mut output = format!("Parsed {} tasks\n", tasks.len());
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for (day, members) in group_by_day(tasks, |t| &t.day) {
        output.push_str(&format!("{}\n", day.to_string().bold().underline()));
        for task in members {
            output.push_str(&format!("  {} {}\n", time_column(&task.time), task.task));
        }
    }

    output
}

/// Format a single task
pub fn format_task_pretty(task: &PlannedTask) -> String {
    let mut output = format!("{} {}\n", status_marker(task.status), task.task.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!("  {}: {}\n", "Day".dimmed(), task.day));
    if !task.time.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Time".dimmed(), task.time));
    }
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), task.status));
    output.push_str(&format!("  {}: {}\n", "Week".dimmed(), task.week));
    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    output
}

/// First segment of a UUID, enough to tell tasks apart on screen.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
