//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::handle_start_command;
use super::documents::handle_document;
use super::types::{HandlerDeps, HandlerError};
use crate::core::error_observer::report_update_error;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Failures inside an endpoint are handed to the error observer, which logs the
/// failing update; the sender gets no failure reply.
///
/// # Arguments
/// * `deps` - Handler dependencies (file store)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler())
        .branch(document_handler(deps))
}

/// Handler for commands from the `Command` enum
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

            let result = match cmd {
                Command::Start => handle_start_command(&bot, &msg).await,
            };
            if let Err(e) = result {
                report_update_error(&msg, &e);
            }
            Ok(())
        },
    ))
}

/// Handler for document uploads
fn document_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.document().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_document(&bot, &msg, &deps).await {
                    report_update_error(&msg, &e);
                }
                Ok(())
            }
        })
}
