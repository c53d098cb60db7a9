//! Repository for the `chat_messages` table.

use gigpay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::chat::{ChatMessage, ChatSessionSummary};

const COLUMNS: &str =
    "id, user_id, message, sender, analysis_mode, chat_session_id, created_at";

/// Cap on the unscoped history read.
const HISTORY_LIMIT: i64 = 50;

/// Cap on the session listing.
const SESSION_LIMIT: i64 = 20;

/// Provides operations for chat messages.
pub struct ChatRepo;

impl ChatRepo {
    /// Append a message, returning the created row.
    pub async fn insert(
        pool: &SqlitePool,
        user_id: DbId,
        message: &str,
        sender: &str,
        analysis_mode: Option<&str>,
        chat_session_id: Option<&str>,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages \
                 (user_id, message, sender, analysis_mode, chat_session_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(message)
            .bind(sender)
            .bind(analysis_mode)
            .bind(chat_session_id)
            .fetch_one(pool)
            .await
    }

    /// The user's most recent messages, bounded, newest first.
    ///
    /// Used to build sentiment-analysis prompt context.
    pub async fn recent(
        pool: &SqlitePool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_messages WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Chronological history for a user, optionally scoped to one session.
    ///
    /// Without a session filter the read is capped at the oldest
    /// [`HISTORY_LIMIT`] messages.
    pub async fn history(
        pool: &SqlitePool,
        user_id: DbId,
        chat_session_id: Option<&str>,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        match chat_session_id {
            Some(session) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM chat_messages \
                     WHERE user_id = $1 AND chat_session_id = $2 \
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, ChatMessage>(&query)
                    .bind(user_id)
                    .bind(session)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM chat_messages \
                     WHERE user_id = $1 \
                     ORDER BY created_at ASC, id ASC \
                     LIMIT $2"
                );
                sqlx::query_as::<_, ChatMessage>(&query)
                    .bind(user_id)
                    .bind(HISTORY_LIMIT)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// The user's most recent sessions, newest first, capped at
    /// [`SESSION_LIMIT`].
    ///
    /// Each session is summarized from its messages: first user message as
    /// the title, latest message from either side as the preview.
    pub async fn sessions(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<ChatSessionSummary>, sqlx::Error> {
        sqlx::query_as::<_, ChatSessionSummary>(
            "SELECT \
                 cm.chat_session_id AS id, \
                 MIN(cm.created_at) AS created_at, \
                 COUNT(*) AS message_count, \
                 (SELECT message FROM chat_messages first_user \
                   WHERE first_user.chat_session_id = cm.chat_session_id \
                     AND first_user.sender = 'user' \
                   ORDER BY first_user.created_at ASC, first_user.id ASC \
                   LIMIT 1) AS title, \
                 (SELECT message FROM chat_messages latest \
                   WHERE latest.chat_session_id = cm.chat_session_id \
                   ORDER BY latest.created_at DESC, latest.id DESC \
                   LIMIT 1) AS last_message \
             FROM chat_messages cm \
             WHERE cm.user_id = $1 AND cm.chat_session_id IS NOT NULL \
             GROUP BY cm.chat_session_id \
             ORDER BY MIN(cm.created_at) DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(SESSION_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Delete every message in one of the user's sessions.
    ///
    /// Returns the number of messages removed; deleting an absent session
    /// removes nothing and is not an error.
    pub async fn delete_session(
        pool: &SqlitePool,
        user_id: DbId,
        chat_session_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM chat_messages WHERE user_id = $1 AND chat_session_id = $2",
        )
        .bind(user_id)
        .bind(chat_session_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
