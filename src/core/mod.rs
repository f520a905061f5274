//! Core abstractions for weekplan.
//!
//! Day labels, the persisted task model, and the storage adapter trait
//! shared by the parser, the storage backends, and the commands.

mod day;
mod task;
mod traits;

pub use day::{weekday_name, DayLabel, WEEKDAYS};
pub use task::{
    group_by_day, validate_week, PlannedTask, TaskField, TaskStatus, WEEKS_PER_MONTH,
};
pub use traits::TaskStore;

#[cfg(test)]
pub use traits::MockTaskStore;
