//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /               -> create
/// GET  /{id}           -> get_by_id
/// GET  /{id}/tasks     -> tasks
/// GET  /{id}/payments  -> payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/{id}", get(users::get_by_id))
        .route("/{id}/tasks", get(users::tasks))
        .route("/{id}/payments", get(users::payments))
}
