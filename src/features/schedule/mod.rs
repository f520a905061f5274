//! Schedule text ("magic input") parsing.
//!
//! Turns pasted or typed schedules into day/time/task records. Understands:
//! - CSV rows: `Day 1, 7:00 PM - 9:00 PM, "Install tools, then test"`
//! - day headers followed by timed lines:
//!   ```text
//!   **Monday**
//!   - 9am Math homework
//!   - 10:00-11:00 Review notes
//!   ```
//! - numbered days (`Day 3`) in either style

mod parser;
pub mod rules;

pub use parser::{parse_schedule, parse_schedule_with_ids, ParsedTask};
pub use rules::{classify, Outcome, Rule, TaskDraft};
