//! Shared helpers for integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) over
//! an `#[sqlx::test]`-provisioned pool, plus request/seed helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use gigpay_ai::GroqClient;
use gigpay_api::config::ServerConfig;
use gigpay_api::router::build_app_router;
use gigpay_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with no AI client configured, so
/// every AI feature serves its deterministic fallback.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_ai(pool, None)
}

/// Build the full application router with an explicit AI client (tests
/// point it at a local stub server).
pub fn build_test_app_with_ai(pool: SqlitePool, ai: Option<GroqClient>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: ai.map(Arc::new),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST with no body (e.g. task completion).
pub async fn post_empty(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a user directly, returning its ID.
pub async fn seed_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert `count` completed tasks for the user, stamped now.
pub async fn seed_completed_tasks(pool: &SqlitePool, user_id: i64, count: i64) {
    for i in 0..count {
        sqlx::query(
            "INSERT INTO tasks (user_id, title, status, completed_at) \
             VALUES ($1, $2, 'completed', CURRENT_TIMESTAMP)",
        )
        .bind(user_id)
        .bind(format!("task {i}"))
        .execute(pool)
        .await
        .unwrap();
    }
}

/// Insert a chat message directly.
pub async fn seed_chat_message(pool: &SqlitePool, user_id: i64, message: &str) {
    sqlx::query("INSERT INTO chat_messages (user_id, message, sender) VALUES ($1, $2, 'user')")
        .bind(user_id)
        .bind(message)
        .execute(pool)
        .await
        .unwrap();
}
