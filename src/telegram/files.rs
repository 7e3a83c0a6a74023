//! Retrieval of uploaded file contents from the Bot API

use async_trait::async_trait;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::FileId;

use crate::core::error::AppResult;

/// Resolves a provider file handle to the file's bytes
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn fetch(&self, file_id: &str) -> AppResult<Vec<u8>>;
}

/// [`FileSource`] backed by `getFile` + the Bot API file endpoint
#[derive(Clone)]
pub struct TelegramFileSource {
    bot: Bot,
}

impl TelegramFileSource {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl FileSource for TelegramFileSource {
    async fn fetch(&self, file_id: &str) -> AppResult<Vec<u8>> {
        log::info!("📥 Starting download for file_id: {}", file_id);

        let file = self.bot.get_file(FileId(file_id.to_string())).await?;
        log::info!(
            "✅ File info retrieved: path = {}, size = {} bytes",
            file.path,
            file.size
        );

        // Grows with the bytes actually received, not the reported size
        let mut data = Vec::new();
        self.bot.download_file(&file.path, &mut data).await?;

        log::info!(
            "📊 Downloaded {} bytes ({:.2} MB)",
            data.len(),
            data.len() as f64 / (1024.0 * 1024.0)
        );

        Ok(data)
    }
}
