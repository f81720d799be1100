use anyhow::{Context, Result};
use chrono::DateTime;
use rusqlite::{params, Connection};

use crate::history::{HistoryEntry, HistoryLog};
use crate::splitter::SplitResult;

/// SQLite persistence for the split history.
///
/// Only history entries are stored; working input, results and selection
/// always start empty.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Create a new in-memory store
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to create in-memory database")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open (or create) a store file
    pub fn open(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS history (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                timestamp_ms INTEGER NOT NULL,
                preview TEXT NOT NULL,
                chunks TEXT NOT NULL,
                total_chunks INTEGER NOT NULL,
                original_text TEXT NOT NULL
            );
            "#,
            )
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Store an entry as the newest one
    pub fn insert_entry(&self, entry: &HistoryEntry) -> Result<()> {
        let chunks = serde_json::to_string(&entry.chunks)
            .context(format!("Failed to encode chunks of entry: {}", entry.id))?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO history (id, timestamp_ms, preview, chunks, total_chunks, original_text) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    entry.id,
                    entry.timestamp.timestamp_millis(),
                    entry.preview,
                    chunks,
                    entry.total_chunks as i64,
                    entry.original_text
                ],
            )
            .context(format!("Failed to insert history entry: {}", entry.id))?;
        Ok(())
    }

    /// Delete an entry; returns whether a row was removed
    pub fn delete_entry(&self, id: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM history WHERE id = ?1", params![id])
            .context(format!("Failed to delete history entry: {}", id))?;
        Ok(removed > 0)
    }

    /// Delete every entry
    pub fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM history", [])
            .context("Failed to clear history")?;
        Ok(())
    }

    /// All entries, newest first
    pub fn load_entries(&self) -> Result<Vec<HistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp_ms, preview, chunks, total_chunks, original_text FROM history ORDER BY seq DESC",
            )
            .context("Failed to prepare statement")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .context("Failed to query history")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to collect history")?;

        rows.into_iter()
            .map(
                |(id, timestamp_ms, preview, chunks, total_chunks, original_text)| -> Result<HistoryEntry> {
                    let chunks: Vec<SplitResult> = serde_json::from_str(&chunks)
                        .context(format!("Corrupt chunks for history entry: {}", id))?;
                    let timestamp = DateTime::from_timestamp_millis(timestamp_ms)
                        .context(format!("Invalid timestamp for history entry: {}", id))?;

                    Ok(HistoryEntry {
                        id,
                        timestamp,
                        preview,
                        chunks,
                        total_chunks: total_chunks as usize,
                        original_text,
                    })
                },
            )
            .collect()
    }

    /// Rebuild the in-memory log from the stored entries
    pub fn load_log(&self) -> Result<HistoryLog> {
        Ok(HistoryLog::from_newest_first(self.load_entries()?))
    }

    pub fn entry_count(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))
            .context("Failed to count history entries")?;
        Ok(count)
    }
}
