//! Feature implementations for weekplan.
//!
//! - Schedule parsing (CSV rows, day headers, timed lines)
//! - Shell integration (completions)

pub mod schedule;
pub mod shell;
