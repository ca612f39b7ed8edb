use rusqlite::Connection;

use rusqlite::OptionalExtension;

use crate::error::{Result, StoreError};

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    // Two processes setting the offset at once just wait; last write wins.
    conn.pragma_update(None, "busy_timeout", 5000)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;

    match get_schema_version(conn)? {
        Some(v) if v > SCHEMA_VERSION => {
            return Err(StoreError::InvalidData(format!(
                "database schema version {v} is newer than supported version {SCHEMA_VERSION}"
            )));
        }
        Some(_) => {}
        None => {
            conn.execute(
                "INSERT INTO metadata (key, value) VALUES ('schema_version', ?1)",
                [SCHEMA_VERSION.to_string()],
            )?;
        }
    }

    tracing::debug!("schema initialized (version {SCHEMA_VERSION})");
    Ok(())
}

pub fn get_schema_version(conn: &Connection) -> Result<Option<i64>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    raw.map(|v| {
        v.parse::<i64>()
            .map_err(|_| StoreError::InvalidData(format!("corrupt schema_version {v:?}")))
    })
    .transpose()
}
