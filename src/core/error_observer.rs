//! Process-wide error observer
//!
//! Every failure raised while handling an update ends up here exactly once.
//! The observer only logs: it never retries and never notifies the sender.

use std::fmt;

use teloxide::types::Message;

/// Compact, log-friendly description of the update that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub chat_id: i64,
    pub message_id: i32,
    pub kind: UpdateKind,
}

/// What the failing update carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    /// A bot command such as `/start`
    Command(String),
    /// A document upload
    Document { file_id: String, file_name: Option<String> },
    /// Anything else
    Other,
}

impl UpdateSummary {
    /// Builds a summary from a Telegram message
    pub fn from_message(msg: &Message) -> Self {
        let kind = if let Some(doc) = msg.document() {
            UpdateKind::Document {
                file_id: doc.file.id.0.clone(),
                file_name: doc.file_name.clone(),
            }
        } else if let Some(text) = msg.text().filter(|t| t.starts_with('/')) {
            UpdateKind::Command(text.split_whitespace().next().unwrap_or(text).to_string())
        } else {
            UpdateKind::Other
        };

        Self {
            chat_id: msg.chat.id.0,
            message_id: msg.id.0,
            kind,
        }
    }
}

impl fmt::Display for UpdateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chat={} message={} ", self.chat_id, self.message_id)?;
        match &self.kind {
            UpdateKind::Command(cmd) => write!(f, "command={}", cmd),
            UpdateKind::Document { file_id, file_name } => write!(
                f,
                "document(file_id={}, file_name={})",
                file_id,
                file_name.as_deref().unwrap_or("<none>")
            ),
            UpdateKind::Other => write!(f, "other"),
        }
    }
}

/// Formats the line written for a failed update
pub fn format_update_error(update: &UpdateSummary, error: &dyn fmt::Display) -> String {
    format!("Update {} caused error {}", update, error)
}

/// Logs a failed update. Takes no corrective action.
pub fn report_update_error(msg: &Message, error: &dyn fmt::Display) {
    let summary = UpdateSummary::from_message(msg);
    log::warn!("{}", format_update_error(&summary, error));
}
