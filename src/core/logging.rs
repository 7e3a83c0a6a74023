//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup configuration report

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger is already installed
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Masks a secret for logging, keeping only the bot id prefix of a token
///
/// `123456:ABC-DEF` becomes `123456:***`; anything without a colon is fully hidden.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "<not set>".to_string();
    }
    match token.split_once(':') {
        Some((bot_id, _)) if !bot_id.is_empty() => format!("{}:***", bot_id),
        _ => "***".to_string(),
    }
}

/// Logs the effective configuration at application startup
///
/// Reports:
/// - Bot token presence (masked)
/// - Database and log file locations
/// - A leftover MONGODB_URL, which is ignored
/// - Custom Bot API server, if any
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config::BOT_TOKEN.is_empty() {
        log::error!("❌ BOT_TOKEN: not set (also checked TELEGRAM_BOT_TOKEN, TELOXIDE_TOKEN)");
    } else {
        log::info!("✅ BOT_TOKEN: {}", mask_token(&config::BOT_TOKEN));
    }

    log::info!("🗄️  DATABASE_PATH: {}", config::DATABASE_PATH.as_str());
    if config::LEGACY_MONGODB_URL.is_some() {
        log::warn!("⚠️  MONGODB_URL is set but ignored; files are stored in DATABASE_PATH");
    }
    log::info!("📝 LOG_FILE_PATH: {}", config::LOG_FILE_PATH.as_str());

    match config::BOT_API_URL.as_deref() {
        Some(url) => log::info!("🌐 BOT_API_URL: {}", url),
        None => log::info!("🌐 BOT_API_URL: not set, using api.telegram.org"),
    }

    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
