//! Document ingestion: fetch the uploaded bytes, store them, build the reply

use teloxide::types::Message;

use super::files::FileSource;
use crate::core::error::AppResult;
use crate::storage::files::{FileStore, StoredFile};

/// Reply to `/start`
pub const WELCOME_TEXT: &str = "Hi! Send me any file and I will store it for you.";

/// Name used when the sender's client did not attach a file name
pub const UNNAMED_DOCUMENT: &str = "unnamed";

/// A document upload as seen by the ingestion handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEvent {
    /// Provider-assigned file handle
    pub file_id: String,
    /// Display name supplied by the sender
    pub file_name: String,
}

impl DocumentEvent {
    pub fn new(file_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            file_name: file_name.into(),
        }
    }

    /// Extracts the document from a message, `None` for non-document messages
    pub fn from_message(msg: &Message) -> Option<Self> {
        let doc = msg.document()?;
        Some(Self {
            file_id: doc.file.id.0.clone(),
            file_name: doc.file_name.clone().unwrap_or_else(|| UNNAMED_DOCUMENT.to_string()),
        })
    }
}

/// Confirmation text for a stored file
pub fn stored_reply(file_name: &str) -> String {
    format!("Successfully stored file {}.", file_name)
}

/// Downloads the document and writes exactly one record for it
///
/// Failures are returned unchanged: nothing is retried and nothing is written when
/// the download fails.
///
/// # Returns
/// The confirmation reply to send back to the chat
pub async fn ingest_document(source: &dyn FileSource, store: &dyn FileStore, event: &DocumentEvent) -> AppResult<String> {
    let data = source.fetch(&event.file_id).await?;
    let size = data.len();

    let id = store.insert(StoredFile::new(event.file_name.clone(), data)).await?;
    log::info!("💾 Stored file '{}' ({} bytes) as #{}", event.file_name, size, id);

    Ok(stored_reply(&event.file_name))
}
