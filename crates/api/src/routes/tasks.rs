//! Route definitions for the `/tasks` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST /                -> create
/// POST /{id}/complete   -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tasks::create))
        .route("/{id}/complete", post(tasks::complete))
}
