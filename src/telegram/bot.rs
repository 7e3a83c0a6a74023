//! Bot initialization utilities
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command menu registration

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use url::Url;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Arguments
/// * `token` - Bot API token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - Empty token, invalid BOT_API_URL or HTTP client failure
pub fn create_bot(token: &str) -> AppResult<Bot> {
    if token.trim().is_empty() {
        return Err(AppError::Validation(
            "Bot token is not set (BOT_TOKEN, TELEGRAM_BOT_TOKEN or TELOXIDE_TOKEN)".to_string(),
        ));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token, client);

    let bot = match config::BOT_API_URL.as_deref() {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            bot.set_api_url(parse_api_url(bot_api_url)?)
        }
        None => bot,
    };

    Ok(bot)
}

/// Parses a custom Bot API server address
pub fn parse_api_url(raw: &str) -> AppResult<Url> {
    Ok(Url::parse(raw.trim())?)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
