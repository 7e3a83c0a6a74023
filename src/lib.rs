//! Filekeeper - Telegram bot that stores every document it receives
//!
//! Users send a file to the bot; the bot downloads it from the Bot API,
//! writes one `{name, data}` record into the database and confirms with a reply.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, logging and the update error observer
//! - `storage`: Database pool, migrations and the stored files collection
//! - `telegram`: Bot creation, file retrieval, ingestion and handlers
//! - `cli`: Command line interface

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use storage::{create_pool, get_connection, DbConnection, DbPool, FileStore, SqliteFileStore, StoredFile};
pub use telegram::{ingest_document, schema, DocumentEvent, FileSource, HandlerDeps};
