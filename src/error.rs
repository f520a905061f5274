//! Error types for weekplan.

use thiserror::Error;

/// Errors that can occur while planning, storing, or displaying tasks.
///
/// The schedule parser itself never fails; "nothing recognized" is only
/// raised by the commands that act on an empty parse result.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `SQLite` storage error.
    #[error("Database error: {0}")]
    Database(String),

    /// A task (or other item) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A user-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Schedule text exceeded the configured input bound.
    #[error("Input is {size} bytes, larger than the {limit} byte limit")]
    InputTooLarge {
        /// Size of the rejected input.
        size: usize,
        /// Configured limit (`parser.max_input_bytes`).
        limit: usize,
    },

    /// The schedule text contained no recognizable tasks.
    #[error("No valid tasks found. Try \"Day 1, 9am, Math\"")]
    NothingRecognized,
}

impl PlannerError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NothingRecognized => 2,
            Self::NotFound(_) | Self::InvalidArgument(_) | Self::InputTooLarge { .. } => 3,
            Self::Io(_) | Self::Json(_) | Self::Config(_) | Self::Database(_) => 1,
        }
    }
}
