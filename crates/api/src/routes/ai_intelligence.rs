//! Route definitions for the `/ai` intelligence endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::ai_intelligence;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// GET /predictions?user_id=  -> predictions
/// GET /anomalies?user_id=    -> anomalies
/// GET /sentiment?user_id=    -> sentiment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predictions", get(ai_intelligence::predictions))
        .route("/anomalies", get(ai_intelligence::anomalies))
        .route("/sentiment", get(ai_intelligence::sentiment))
}
