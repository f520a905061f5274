//! JSON file task storage.
//!
//! The whole task list is one JSON array, rewritten on every change.

use std::path::PathBuf;

use crate::core::{PlannedTask, TaskField, TaskStatus, TaskStore};
use crate::error::PlannerError;

/// Tasks kept in a single JSON file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Use the JSON file at `path`. The file is created on first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<PlannedTask>, PlannerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, tasks: &[PlannedTask]) -> Result<(), PlannerError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(tasks)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Apply `change` to the task with `id` and save.
    fn modify<F>(&self, id: &str, change: F) -> Result<(), PlannerError>
    where
        F: FnOnce(&mut PlannedTask),
    {
        let mut tasks = self.read()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| PlannerError::NotFound(format!("Task '{id}'")))?;
        change(task);
        self.write(&tasks)
    }
}

impl TaskStore for JsonStore {
    fn append(&self, tasks: &[PlannedTask]) -> Result<(), PlannerError> {
        let mut all = self.read()?;
        all.extend_from_slice(tasks);
        self.write(&all)?;
        log::info!("Stored {} tasks in {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<PlannedTask>, PlannerError> {
        self.read()
    }

    fn update_field(&self, id: &str, field: TaskField, value: &str) -> Result<(), PlannerError> {
        self.modify(id, |task| task.set_field(field, value))?;
        log::info!("Updated {field} of task {id}");
        Ok(())
    }

    fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), PlannerError> {
        self.modify(id, |task| task.status = status)?;
        log::info!("Task {id} is now {status}");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), PlannerError> {
        let mut tasks = self.read()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(PlannerError::NotFound(format!("Task '{id}'")));
        }
        self.write(&tasks)?;
        log::info!("Deleted task {id}");
        Ok(())
    }
}
