//! SQLite schema for the key-value blob backend.

/// Complete schema for the blob backend.
///
/// A single table mirrors the browser origin's key-value blob area: each
/// collection is one serialized JSON array under a fixed key. There is no
/// schema version field; a format change requires clearing storage.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_key_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)",
            ["patients", "[]"],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)",
            ["patients", "[]"],
        );
        assert!(result.is_err());
    }
}
