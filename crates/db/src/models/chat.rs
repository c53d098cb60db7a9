//! Chat message models.

use gigpay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Message sender values stored in `chat_messages.sender`.
pub mod sender {
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// A row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub sender: String,
    pub analysis_mode: Option<String>,
    pub chat_session_id: Option<String>,
    pub created_at: Timestamp,
}

/// One chat session aggregated from its messages.
///
/// `title` is the session's first user message (None for sessions holding
/// only assistant messages); `last_message` is the latest message from
/// either side. The API layer truncates both for display.
#[derive(Debug, Clone, FromRow)]
pub struct ChatSessionSummary {
    pub id: String,
    pub created_at: Timestamp,
    pub message_count: i64,
    pub title: Option<String>,
    pub last_message: Option<String>,
}
