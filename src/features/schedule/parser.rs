//! Schedule parser.
//!
//! A single forward pass over the lines of the input, folding each line into
//! a parse state that carries the day currently in effect.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rules::{classify, Outcome, TaskDraft};
use crate::core::DayLabel;

/// A task recognized in schedule text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Identifier, unique within one parse.
    pub id: String,
    /// Day the task belongs to.
    pub day: DayLabel,
    /// Time or time range exactly as written (trimmed).
    pub time: String,
    /// Task description without bullets or emphasis.
    pub task: String,
}

impl ParsedTask {
    fn from_draft(draft: TaskDraft, id: String) -> Self {
        Self {
            id,
            day: draft.day,
            time: draft.time,
            task: draft.task,
        }
    }
}

/// Byte order mark left at the start of text saved by some editors.
const BOM: char = '\u{feff}';

#[derive(Debug, Default)]
struct ParseState {
    current_day: Option<DayLabel>,
    tasks: Vec<ParsedTask>,
}

impl ParseState {
    fn advance<F>(mut self, line_no: usize, line: &str, next_id: &mut F) -> Self
    where
        F: FnMut() -> String,
    {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        match classify(line, self.current_day.as_ref()) {
            Some((_, Outcome::Emit(draft))) => {
                self.tasks.push(ParsedTask::from_draft(draft, next_id()));
            },
            Some((_, Outcome::SetDay(day))) => {
                log::trace!("line {line_no}: day is now {day}");
                self.current_day = Some(day);
            },
            Some((rule, Outcome::Ignore)) => {
                log::trace!("line {line_no}: ignored by {} rule", rule.name());
            },
            None => {
                log::debug!("line {line_no}: dropped unrecognized line {line:?}");
            },
        }
        self
    }
}

/// Parse schedule text into tasks, in input order.
///
/// Never fails: lines that cannot be understood are skipped, so an empty
/// result means nothing was recognized.
///
/// # Examples
///
/// ```
/// use weekplan::features::schedule::parse_schedule;
///
/// let tasks = parse_schedule("Monday\n9am Math homework");
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].day.to_string(), "Monday");
/// assert_eq!(tasks[0].time, "9am");
/// assert_eq!(tasks[0].task, "Math homework");
///
/// let tasks = parse_schedule("Day 1, 7:00 PM - 9:00 PM, \"Install tools, then test\"");
/// assert_eq!(tasks[0].day.to_string(), "Day 1");
/// assert_eq!(tasks[0].task, "Install tools, then test");
/// ```
#[must_use]
pub fn parse_schedule(text: &str) -> Vec<ParsedTask> {
    parse_schedule_with_ids(text, || Uuid::new_v4().to_string())
}

/// Parse schedule text, taking task ids from `next_id`.
///
/// `next_id` is called once per emitted task, in output order.
#[must_use]
pub fn parse_schedule_with_ids<F>(text: &str, mut next_id: F) -> Vec<ParsedTask>
where
    F: FnMut() -> String,
{
    let state = text
        .lines()
        .enumerate()
        .fold(ParseState::default(), |state, (idx, line)| {
            state.advance(idx + 1, line, &mut next_id)
        });
    log::debug!("parsed {} tasks", state.tasks.len());
    state.tasks
}
