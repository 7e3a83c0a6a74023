//! Document upload handler

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::HandlerDeps;
use crate::core::error::{AppError, AppResult};
use crate::telegram::files::TelegramFileSource;
use crate::telegram::ingest::{ingest_document, DocumentEvent};

/// Stores the document carried by `msg` and confirms it in the same chat
///
/// The reply is only sent once the record has been written.
pub async fn handle_document(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    let event = DocumentEvent::from_message(msg)
        .ok_or_else(|| AppError::Validation("message carries no document".to_string()))?;

    log::info!(
        "📄 Document '{}' received from chat {}",
        event.file_name,
        msg.chat.id
    );

    let source = TelegramFileSource::new(bot.clone());
    let reply = ingest_document(&source, deps.store.as_ref(), &event).await?;

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
