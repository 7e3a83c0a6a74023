//! Stored files collection
//!
//! A flat, insert-only collection of `{name, data}` records. Names are not unique
//! and rows are never updated or deleted by the bot.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Result};

use super::db::{get_connection, DbConnection, DbPool};
use crate::core::error::AppResult;

/// A document as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Display name supplied by the sender
    pub name: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl StoredFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A stored file together with the metadata assigned by the database
#[derive(Debug, Clone)]
pub struct StoredFileEntry {
    /// Row ID assigned on insert
    pub id: i64,
    pub file: StoredFile,
    /// Insert timestamp (SQLite `CURRENT_TIMESTAMP`, UTC)
    pub stored_at: String,
}

/// Inserts a new file record
///
/// # Returns
///
/// Returns `Ok(id)` on success (ID of the inserted row) or database error.
pub fn save_file(conn: &DbConnection, file: &StoredFile) -> Result<i64> {
    conn.execute(
        "INSERT INTO files (name, data) VALUES (?1, ?2)",
        params![file.name, file.data],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Gets a file record by row ID
pub fn get_file(conn: &DbConnection, id: i64) -> Result<Option<StoredFileEntry>> {
    conn.query_row(
        "SELECT id, name, data, stored_at FROM files WHERE id = ?1",
        params![id],
        |row| {
            Ok(StoredFileEntry {
                id: row.get(0)?,
                file: StoredFile {
                    name: row.get(1)?,
                    data: row.get(2)?,
                },
                stored_at: row.get(3)?,
            })
        },
    )
    .optional()
}

/// Gets every file stored under `name`, oldest first
pub fn find_files_by_name(conn: &DbConnection, name: &str) -> Result<Vec<StoredFileEntry>> {
    let mut stmt = conn.prepare("SELECT id, name, data, stored_at FROM files WHERE name = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map(params![name], |row| {
        Ok(StoredFileEntry {
            id: row.get(0)?,
            file: StoredFile {
                name: row.get(1)?,
                data: row.get(2)?,
            },
            stored_at: row.get(3)?,
        })
    })?;

    rows.collect()
}

/// Counts all stored files
pub fn count_files(conn: &DbConnection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))
}

/// Insert-only persistent collection of stored files
///
/// Handlers receive the store through this trait so the composition root decides
/// which backend is used.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Writes one record and returns its ID
    async fn insert(&self, file: StoredFile) -> AppResult<i64>;
}

/// SQLite-backed [`FileStore`] sharing a connection pool
#[derive(Clone)]
pub struct SqliteFileStore {
    db_pool: Arc<DbPool>,
}

impl SqliteFileStore {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Underlying pool, for read helpers such as [`count_files`]
    pub fn pool(&self) -> &Arc<DbPool> {
        &self.db_pool
    }
}

#[async_trait]
impl FileStore for SqliteFileStore {
    async fn insert(&self, file: StoredFile) -> AppResult<i64> {
        let db_pool = Arc::clone(&self.db_pool);
        // rusqlite is blocking; keep it off the async workers
        tokio::task::spawn_blocking(move || -> AppResult<i64> {
            let conn = get_connection(&db_pool)?;
            Ok(save_file(&conn, &file)?)
        })
        .await?
    }
}
