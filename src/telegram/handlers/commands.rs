//! Command handler implementations (/start)

use teloxide::prelude::*;
use teloxide::types::Message;

use crate::core::error::AppResult;
use crate::telegram::ingest::WELCOME_TEXT;

/// Handle /start command
pub async fn handle_start_command(bot: &Bot, msg: &Message) -> AppResult<()> {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    Ok(())
}
