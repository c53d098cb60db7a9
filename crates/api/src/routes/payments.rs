//! Route definitions for the `/payments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// POST / -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(payments::create))
}
