//! weekplan - turn free-form weekly schedules into a task list
//!
//! This crate parses pasted schedule text (CSV rows, markdown day headers
//! with timed lines) into tasks and keeps them in a JSON file or `SQLite`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{DayLabel, PlannedTask, TaskStatus, TaskStore};
pub use error::PlannerError;
pub use features::schedule::{parse_schedule, ParsedTask};
