//! Route definitions for the `/chat` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// POST   /send                          -> send
/// GET    /history?user_id=&session_id=  -> history
/// GET    /sessions?user_id=             -> sessions
/// DELETE /sessions/{session_id}         -> delete_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(chat::send))
        .route("/history", get(chat::history))
        .route("/sessions", get(chat::sessions))
        .route("/sessions/{session_id}", delete(chat::delete_session))
}
