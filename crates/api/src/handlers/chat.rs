//! Handlers for the workplace chat assistant.

use axum::extract::{Path, Query, State};
use axum::Json;
use gigpay_ai::{generate_text, Generation};
use gigpay_core::chat;
use gigpay_core::types::{DbId, Timestamp};
use gigpay_db::models::chat::{sender, ChatMessage};
use gigpay_db::repositories::ChatRepo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::{required, required_text};
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub user_id: Option<DbId>,
    pub message: Option<String>,
    pub analysis_mode: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<DbId>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatReplyPayload {
    pub reply: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct ChatHistoryPayload {
    pub messages: Vec<ChatMessage>,
}

/// Display caps for the session listing.
const TITLE_MAX_CHARS: usize = 50;
const PREVIEW_MAX_CHARS: usize = 60;

/// Title shown for a session with no user messages.
const UNTITLED_SESSION: &str = "New Chat";

/// One session in the listing, with display-ready title and preview.
#[derive(Serialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub created_at: Timestamp,
    pub last_message: String,
    pub message_count: i64,
}

#[derive(Serialize)]
pub struct SessionsPayload {
    pub sessions: Vec<SessionSummary>,
}

#[derive(Serialize)]
pub struct SessionDeletedPayload {
    pub deleted: u64,
}

/// POST /api/v1/chat/send
///
/// Stores the user message, generates a reply (canned per-mode text when
/// the model is unavailable), and stores the reply under the same session.
/// A fresh session ID is minted when the client sends none.
pub async fn send(
    State(state): State<AppState>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<Json<ApiSuccess<ChatReplyPayload>>> {
    let user_id = required(input.user_id, "user_id")?;
    let message = required_text(input.message, "message")?;
    require_user(&state, user_id).await?;

    let mode = chat::normalize_mode(input.analysis_mode.as_deref());
    let session_id = input
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    ChatRepo::insert(
        &state.pool,
        user_id,
        &message,
        sender::USER,
        Some(mode),
        Some(&session_id),
    )
    .await?;

    let reply = generate_text(
        state.ai_client(),
        Generation {
            feature: "chat",
            system: chat::SYSTEM_PROMPT,
            user: chat::user_prompt(mode, &message),
            temperature: chat::TEMPERATURE,
            max_tokens: chat::MAX_TOKENS,
        },
        || chat::fallback_reply(mode),
    )
    .await;

    ChatRepo::insert(
        &state.pool,
        user_id,
        &reply,
        sender::ASSISTANT,
        Some(mode),
        Some(&session_id),
    )
    .await?;

    Ok(Json(ApiSuccess::new(ChatReplyPayload { reply, session_id })))
}

/// GET /api/v1/chat/history?user_id=&session_id=
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<ApiSuccess<ChatHistoryPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let messages =
        ChatRepo::history(&state.pool, user_id, params.session_id.as_deref()).await?;
    Ok(Json(ApiSuccess::new(ChatHistoryPayload { messages })))
}

/// GET /api/v1/chat/sessions?user_id=
pub async fn sessions(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<ApiSuccess<SessionsPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let sessions = ChatRepo::sessions(&state.pool, user_id)
        .await?
        .into_iter()
        .map(|s| SessionSummary {
            id: s.id,
            title: s
                .title
                .map(|t| truncate(&t, TITLE_MAX_CHARS))
                .unwrap_or_else(|| UNTITLED_SESSION.to_string()),
            created_at: s.created_at,
            last_message: s
                .last_message
                .map(|m| truncate(&m, PREVIEW_MAX_CHARS))
                .unwrap_or_default(),
            message_count: s.message_count,
        })
        .collect();

    Ok(Json(ApiSuccess::new(SessionsPayload { sessions })))
}

/// DELETE /api/v1/chat/sessions/{session_id}?user_id=
///
/// Idempotent: deleting a session that does not exist (or holds no
/// messages for this user) still succeeds with `deleted = 0`.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<ApiSuccess<SessionDeletedPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let deleted = ChatRepo::delete_session(&state.pool, user_id, &session_id).await?;
    if deleted > 0 {
        tracing::debug!(user_id, session_id = %session_id, deleted, "Chat session deleted");
    }

    Ok(Json(ApiSuccess::new(SessionDeletedPayload { deleted })))
}

/// Cap display text at `max` characters, appending an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
