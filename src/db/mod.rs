//! Database module: the SQLite-backed key-value store and its migrations.
mod kv;
#[cfg(test)]
mod memory;
mod migrations;

use std::path::PathBuf;

use anyhow::Result;
use rusqlite::Connection;

use crate::error::StorageError;

#[cfg(test)]
pub use memory::MemoryStore;

/// Durable byte store keyed by a fixed logical key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    tracing::debug!(path = db_path, "database opened");
    Ok(conn)
}

#[cfg(test)]
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Application data directory, created on demand.
/// Returns `None` when the platform has no local data dir.
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("tickdown");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./tickdown.db` when no data dir is found.
pub fn default_db_path() -> String {
    match data_dir() {
        Some(dir) => dir.join("tickdown.db").to_string_lossy().into_owned(),
        None => "tickdown.db".to_string(),
    }
}
