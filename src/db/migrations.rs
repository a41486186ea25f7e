/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the key-value schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value BLOB NOT NULL
        );
        ",
    )?;
    migrate_kv_text_values(conn)?;
    Ok(())
}

/// Early builds declared `value` as TEXT. Rebuild the table so values are stored as raw bytes.
fn migrate_kv_text_values(conn: &Connection) -> Result<()> {
    let text_value = {
        let mut stmt = conn.prepare("PRAGMA table_info(kv)")?;
        let rows = stmt.query_map([], |row| {
            let name: String = row.get(1)?;
            let decl: String = row.get(2)?;
            Ok((name, decl))
        })?;
        let mut found = false;
        for row in rows {
            let (name, decl) = row?;
            if name == "value" && decl.eq_ignore_ascii_case("TEXT") {
                found = true;
            }
        }
        found
    };
    if !text_value {
        return Ok(());
    }

    conn.execute_batch(
        "
        BEGIN;
        ALTER TABLE kv RENAME TO kv_old;
        CREATE TABLE kv (
            key   TEXT PRIMARY KEY,
            value BLOB NOT NULL
        );
        INSERT INTO kv (key, value) SELECT key, CAST(value AS BLOB) FROM kv_old;
        DROP TABLE kv_old;
        COMMIT;
        ",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn text_valued_table_is_rebuilt_keeping_rows() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);
             INSERT INTO kv (key, value) VALUES ('theme', 'dark');",
        )
        .unwrap();
        run_migrations(&conn).unwrap();
        let value: Vec<u8> = conn
            .query_row("SELECT value FROM kv WHERE key = 'theme'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, b"dark");
    }
}
