//! Database migrations for weekplan.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::PlannerError;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 2;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, PlannerError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PlannerError::Database(format!("Failed to get schema version: {e}")))
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), PlannerError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PlannerError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PlannerError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::info!("Migrating task database to v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), PlannerError> {
    match version {
        1 => migrate_v1(conn),
        2 => migrate_v2(conn),
        _ => Err(PlannerError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the task table.
///
/// Column names follow the hosted planner table (`content`, `time_slot`,
/// `week_number`, `day_raw`) so rows can be exchanged with it unchanged.
fn migrate_v1(conn: &Connection) -> Result<(), PlannerError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS tasks (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            day_raw TEXT NOT NULL,
            time_slot TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL,
            week_number INTEGER NOT NULL DEFAULT 1,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| PlannerError::Database(format!("Migration v1 failed: {e}")))
}

/// Migration v2: index for week filtering.
fn migrate_v2(conn: &Connection) -> Result<(), PlannerError> {
    conn.execute_batch(
        r"
        CREATE INDEX IF NOT EXISTS idx_tasks_week
        ON tasks(week_number);
        ",
    )
    .map_err(|e| PlannerError::Database(format!("Migration v2 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_create_task_table() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO tasks (id, day_raw, time_slot, content, created_at)
             VALUES ('abc', 'Monday', '9am', 'Gym', '2026-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        let status: String = conn
            .query_row("SELECT status FROM tasks WHERE id = 'abc'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(status, "pending");
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_upgrade_from_v1() {
        let conn = Connection::open_in_memory().unwrap();
        migrate_v1(&conn).unwrap();
        set_version(&conn, 1).unwrap();

        run(&conn).unwrap();

        let indexes: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_tasks_week'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(indexes, 1);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
