/// Key-value queries against the `kv` table.
use rusqlite::{Connection, params};

use crate::error::StorageError;

use super::KeyValueStore;

pub fn get_value(key: &str, conn: &Connection) -> Result<Option<Vec<u8>>, StorageError> {
    let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn set_value(key: &str, value: &[u8], conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

impl KeyValueStore for Connection {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        get_value(key, self)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        set_value(key, value, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn missing_key_reads_as_none() {
        let conn = db::open_in_memory().unwrap();
        assert!(conn.get("timers").unwrap().is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let conn = db::open_in_memory().unwrap();
        conn.set("theme", b"light").unwrap();
        conn.set("theme", b"dark").unwrap();
        assert_eq!(conn.get("theme").unwrap().as_deref(), Some(&b"dark"[..]));
    }

    #[test]
    fn values_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickdown.db");
        let path = path.to_string_lossy();
        {
            let conn = db::init(&path).unwrap();
            conn.set("timers", b"[]").unwrap();
        }
        let conn = db::init(&path).unwrap();
        assert_eq!(conn.get("timers").unwrap().as_deref(), Some(&b"[]"[..]));
    }
}
