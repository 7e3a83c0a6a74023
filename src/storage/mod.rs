//! Database and stored files collection

pub mod db;
pub mod files;
pub mod migrations;

// Re-exports for convenience
pub use db::{create_pool, get_connection, DbConnection, DbPool};
pub use files::{FileStore, SqliteFileStore, StoredFile};
