//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the Telegram bot.
//! The endpoint functions are public so integration tests can drive them
//! against a mock Bot API server.

mod commands;
mod documents;
mod schema;
mod types;

pub use commands::handle_start_command;
pub use documents::handle_document;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
