//! Telegram bot integration and handlers

pub mod bot;
pub mod files;
pub mod handlers;
pub mod ingest;

// Re-exports for convenience
pub use bot::{create_bot, parse_api_url, setup_bot_commands, Command};
pub use files::{FileSource, TelegramFileSource};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use ingest::{ingest_document, DocumentEvent};
