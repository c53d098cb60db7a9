pub mod ai_intelligence;
pub mod chat;
pub mod gamification;
pub mod health;
pub mod payments;
pub mod tasks;
pub mod users;
pub mod workplace;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                          create (POST)
/// /users/{id}                     get
/// /users/{id}/tasks               user's tasks
/// /users/{id}/payments            user's payments
///
/// /tasks                          create (POST)
/// /tasks/{id}/complete            mark completed (POST)
///
/// /payments                       create (POST)
///
/// /achievements?user_id=          evaluate awards + badge list
/// /leaderboard?limit=             recompute + ranked entries
///
/// /ai/predictions?user_id=        7-day completion forecast
/// /ai/anomalies?user_id=          anomaly report
/// /ai/sentiment?user_id=          chat sentiment analysis
///
/// /chat/send                      send message, get reply (POST)
/// /chat/history?user_id=          chronological messages
///
/// /workplace-analysis             run analysis (POST)
/// /workplace-analysis/history     stored analyses
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/tasks", tasks::router())
        .nest("/payments", payments::router())
        .merge(gamification::router())
        .nest("/ai", ai_intelligence::router())
        .nest("/chat", chat::router())
        .nest("/workplace-analysis", workplace::router())
}
