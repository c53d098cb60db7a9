//! Route definitions for the `/workplace-analysis` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workplace;
use crate::state::AppState;

/// Routes mounted at `/workplace-analysis`.
///
/// ```text
/// POST /                   -> analyze
/// GET  /history?user_id=   -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(workplace::analyze))
        .route("/history", get(workplace::history))
}
