use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use kairos_core::OffsetStore;

use crate::error::{Result, StoreError};
use crate::schema;

/// SQLite-backed key-value store. Implements the engine's [`OffsetStore`]
/// port over its `metadata` table.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM metadata WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        if key == "schema_version" {
            return Err(StoreError::InvalidData(
                "schema_version is managed by the store".to_string(),
            ));
        }
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl OffsetStore for Store {
    type Error = StoreError;

    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        self.get_metadata(key)
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_metadata(key, value)
    }
}
