//! Storage layer for weekplan.
//!
//! Two [`TaskStore`] backends:
//! - a JSON file (`tasks.json`), the default
//! - a `SQLite` database (`weekplan.db`) with versioned migrations

mod database;
mod json_store;
mod migrations;
mod sqlite_store;

pub use database::Database;
pub use json_store::JsonStore;
pub use sqlite_store::SqliteStore;

use crate::config::{Config, Paths, StorageBackend};
use crate::core::TaskStore;
use crate::error::PlannerError;

/// Open the backend selected in `config`.
///
/// # Errors
///
/// Returns an error if the data directory or database cannot be opened.
pub fn open_store(config: &Config, paths: &Paths) -> Result<Box<dyn TaskStore>, PlannerError> {
    paths.ensure_dirs()?;
    log::debug!("Using {} storage in {}", config.storage.backend, paths.root.display());
    Ok(match config.storage.backend {
        StorageBackend::Json => Box::new(JsonStore::new(paths.tasks_json.clone())),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(&paths.database)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_json_default() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());

        let store = open_store(&Config::default(), &paths).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert!(!paths.database.exists());
    }

    #[test]
    fn test_open_store_sqlite() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Sqlite;

        let store = open_store(&config, &paths).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert!(paths.database.exists());
    }
}
