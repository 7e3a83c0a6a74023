//! Common test utilities
//!
//! Shared by the integration tests: a mock Bot API server, message fixtures
//! and a throwaway SQLite store.

#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;
use teloxide::prelude::*;
use teloxide::types::{Me, Message};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use filekeeper::storage::{create_pool, SqliteFileStore};

pub const TEST_TOKEN: &str = "test_token_12345:ABCDEF";
pub const TEST_CHAT_ID: i64 = 123456789;

/// Mock Telegram Bot API server plus a bot pointed at it
pub struct TelegramMock {
    pub server: MockServer,
    pub bot: Bot,
}

impl TelegramMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new(TEST_TOKEN).set_api_url(server.uri().parse().expect("mock server uri"));
        Self { server, bot }
    }

    /// getFile resolves `file_id` to `file_path`
    pub async fn mock_get_file(&self, file_id: &str, file_path: &str, size: usize) {
        let response = serde_json::json!({
            "ok": true,
            "result": {
                "file_id": file_id,
                "file_unique_id": format!("unique_{}", file_id),
                "file_size": size,
                "file_path": file_path
            }
        });

        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot[^/]+/getFile$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// getFile fails the way Telegram reports an unknown or expired handle
    pub async fn mock_get_file_error(&self) {
        let response = serde_json::json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: invalid file_id"
        });

        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot[^/]+/getFile$"))
            .respond_with(ResponseTemplate::new(400).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// File endpoint serves `data` for `file_path`
    pub async fn mock_file_content(&self, file_path: &str, data: &[u8]) {
        Mock::given(method("GET"))
            .and(path_regex(format!(
                "^/file/bot[^/]+/{}$",
                // teloxide percent-encodes the `/` separators in `file_path`
                file_path.replace('.', r"\.").replace('/', "(?:/|%2[Ff])")
            )))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(data.to_vec()))
            .mount(&self.server)
            .await;
    }

    /// sendMessage echoes a bot message back
    pub async fn mock_send_message(&self) {
        let response = serde_json::json!({
            "ok": true,
            "result": {
                "message_id": 42,
                "from": {
                    "id": 987654321,
                    "is_bot": true,
                    "first_name": "TestBot",
                    "username": "test_bot"
                },
                "chat": {
                    "id": TEST_CHAT_ID,
                    "first_name": "Test",
                    "type": "private"
                },
                "date": 1735992000,
                "text": "ok"
            }
        });

        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot[^/]+/sendMessage$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Texts of every sendMessage request received so far
    pub async fn sent_texts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().to_lowercase().ends_with("/sendmessage"))
            .filter_map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).ok())
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}

fn base_message_json() -> serde_json::Value {
    serde_json::json!({
        "message_id": 1,
        "date": 1234567890,
        "chat": {
            "id": TEST_CHAT_ID,
            "type": "private",
            "first_name": "Test"
        },
        "from": {
            "id": TEST_CHAT_ID,
            "is_bot": false,
            "first_name": "Test",
            "username": "testuser"
        }
    })
}

/// JSON of a private-chat text message
pub fn text_message_json(text: &str) -> serde_json::Value {
    let mut json = base_message_json();
    json["text"] = serde_json::json!(text);
    if text.starts_with('/') {
        let length = text.split_whitespace().next().map(|c| c.len()).unwrap_or(text.len());
        json["entities"] = serde_json::json!([{ "type": "bot_command", "offset": 0, "length": length }]);
    }
    json
}

/// JSON of a private-chat document message; `file_name` is optional in the Bot API
pub fn document_message_json(file_id: &str, file_name: Option<&str>) -> serde_json::Value {
    let mut json = base_message_json();
    let mut document = serde_json::json!({
        "file_id": file_id,
        "file_unique_id": format!("unique_{}", file_id),
        "file_size": 11
    });
    if let Some(name) = file_name {
        document["file_name"] = serde_json::json!(name);
    }
    json["document"] = document;
    json
}

/// A private-chat text message
pub fn text_message(text: &str) -> Message {
    serde_json::from_value(text_message_json(text)).expect("valid text message")
}

/// A private-chat document message
pub fn document_message(file_id: &str, file_name: Option<&str>) -> Message {
    serde_json::from_value(document_message_json(file_id, file_name)).expect("valid document message")
}

/// Wraps a message into an incoming update
pub fn message_update(update_id: i32, message: serde_json::Value) -> Update {
    // `Update`'s deserializer only recognizes the kind when parsing from text,
    // so go through a string rather than `from_value`.
    let json = serde_json::json!({
        "update_id": update_id,
        "message": message
    });
    serde_json::from_str(&json.to_string()).expect("valid update")
}

/// The bot's own identity, as `getMe` would report it
pub fn bot_me() -> Me {
    serde_json::from_value(serde_json::json!({
        "id": 987654321,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
    .expect("valid bot identity")
}

/// A SQLite-backed store in a temporary directory
pub fn temp_store() -> (TempDir, SqliteFileStore) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("files.sqlite");
    let pool = create_pool(path.to_str().expect("utf-8 path")).expect("failed to create pool");
    (dir, SqliteFileStore::new(Arc::new(pool)))
}
