//! The storage adapter contract.
//!
//! Commands only talk to storage through [`TaskStore`], so the JSON file
//! backend and the `SQLite` backend are interchangeable.

#[cfg(test)]
use mockall::automock;

use super::{PlannedTask, TaskField, TaskStatus};
use crate::error::PlannerError;

/// Persistence for planned tasks.
///
/// Implementations must accept day labels in any form ("Monday", "Day 3",
/// or a free word) and return tasks in the order they were appended.
#[cfg_attr(test, automock)]
pub trait TaskStore {
    /// Persist new tasks after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn append(&self, tasks: &[PlannedTask]) -> Result<(), PlannerError>;

    /// Load every stored task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_all(&self) -> Result<Vec<PlannedTask>, PlannerError>;

    /// Replace the text of one field of a task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NotFound` if no task has this id.
    fn update_field(&self, id: &str, field: TaskField, value: &str) -> Result<(), PlannerError>;

    /// Change the status of a task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NotFound` if no task has this id.
    fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), PlannerError>;

    /// Remove a task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NotFound` if no task has this id.
    fn delete(&self, id: &str) -> Result<(), PlannerError>;

    /// Find a single task by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, id: &str) -> Result<Option<PlannedTask>, PlannerError> {
        Ok(self.load_all()?.into_iter().find(|task| task.id == id))
    }
}
