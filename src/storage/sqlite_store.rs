//! `SQLite` task storage.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::Database;
use crate::core::{DayLabel, PlannedTask, TaskField, TaskStatus, TaskStore};
use crate::error::PlannerError;

/// Tasks kept in the `tasks` table of a [`Database`].
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open (and migrate) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(path: &std::path::Path) -> Result<Self, PlannerError> {
        Ok(Self::with_database(Database::open_at(path)?))
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    fn ensure_changed(changed: usize, id: &str) -> Result<(), PlannerError> {
        if changed == 0 {
            Err(PlannerError::NotFound(format!("Task '{id}'")))
        } else {
            Ok(())
        }
    }
}

impl TaskStore for SqliteStore {
    fn append(&self, tasks: &[PlannedTask]) -> Result<(), PlannerError> {
        let conn = self.db.connection();
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| PlannerError::Database(format!("Failed to begin transaction: {e}")))?;

        for task in tasks {
            tx.execute(
                r"INSERT INTO tasks
                  (id, day_raw, time_slot, content, week_number, status, created_at)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    task.id,
                    task.day.to_string(),
                    task.time,
                    task.task,
                    task.week,
                    task.status.to_string(),
                    task.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| PlannerError::Database(format!("Failed to insert task: {e}")))?;
        }

        tx.commit()
            .map_err(|e| PlannerError::Database(format!("Failed to commit tasks: {e}")))?;
        log::info!("Stored {} tasks in the database", tasks.len());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<PlannedTask>, PlannerError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, day_raw, time_slot, content, week_number, status, created_at
                  FROM tasks ORDER BY seq",
            )
            .map_err(|e| PlannerError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_task)
            .map_err(|e| PlannerError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(|e| PlannerError::Database(e.to_string()))?);
        }

        Ok(tasks)
    }

    fn update_field(&self, id: &str, field: TaskField, value: &str) -> Result<(), PlannerError> {
        let sql = match field {
            TaskField::Time => "UPDATE tasks SET time_slot = ?1 WHERE id = ?2",
            TaskField::Task => "UPDATE tasks SET content = ?1 WHERE id = ?2",
        };
        let changed = self
            .db
            .connection()
            .execute(sql, params![value, id])
            .map_err(|e| PlannerError::Database(format!("Failed to update task: {e}")))?;
        Self::ensure_changed(changed, id)?;
        log::info!("Updated {field} of task {id}");
        Ok(())
    }

    fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), PlannerError> {
        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE tasks SET status = ?1 WHERE id = ?2",
                params![status.to_string(), id],
            )
            .map_err(|e| PlannerError::Database(format!("Failed to update status: {e}")))?;
        Self::ensure_changed(changed, id)?;
        log::info!("Task {id} is now {status}");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), PlannerError> {
        let changed = self
            .db
            .connection()
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(|e| PlannerError::Database(format!("Failed to delete task: {e}")))?;
        Self::ensure_changed(changed, id)?;
        log::info!("Deleted task {id}");
        Ok(())
    }
}

/// Convert a database row to a task.
fn row_to_task(row: &Row) -> rusqlite::Result<PlannedTask> {
    let day: String = row.get(1)?;
    let status: String = row.get(5)?;
    let created_at: String = row.get(6)?;

    Ok(PlannedTask {
        id: row.get(0)?,
        day: DayLabel::from(day),
        time: row.get(2)?,
        task: row.get(3)?,
        week: row.get(4)?,
        status: status.parse().unwrap_or_else(|_| {
            log::warn!("Unknown task status '{status}', treating as pending");
            TaskStatus::Pending
        }),
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
            })?,
    })
}
