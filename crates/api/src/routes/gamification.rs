//! Route definitions for achievements and the leaderboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::gamification;
use crate::state::AppState;

/// Routes mounted at the API root (no shared prefix).
///
/// ```text
/// GET /achievements?user_id=  -> achievements
/// GET /leaderboard?limit=     -> leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/achievements", get(gamification::achievements))
        .route("/leaderboard", get(gamification::leaderboard))
}
