//! HTTP-level integration tests for user, task, and payment endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_returns_200_with_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        json!({"name": "Ada", "email": "ada@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_without_email_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/users", json!({"name": "Ada"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_409(pool: SqlitePool) {
    let payload = json!({"name": "Ada", "email": "ada@example.com"});

    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/users", payload.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let second = post_json(app, "/api/v1/users", payload).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = body_json(second).await;
    assert_eq!(body["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_task_starts_pending(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"user_id": user_id, "title": "Write report"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["task"]["status"], "pending");
    assert!(body["task"]["completed_at"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_task_for_unknown_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"user_id": 424242, "title": "Orphan task"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_task_without_title_returns_400(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", json!({"user_id": user_id})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn complete_task_stamps_completed_at(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool.clone());
    let created = post_json(
        app,
        "/api/v1/tasks",
        json!({"user_id": user_id, "title": "Finish invoice"}),
    )
    .await;
    let task_id = body_json(created).await["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/tasks/{task_id}/complete")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["task"]["status"], "completed");
    assert!(body["task"]["completed_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn complete_nonexistent_task_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/tasks/999999/complete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_user_tasks_newest_first(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;
    for title in ["first", "second"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/tasks",
            json!({"user_id": user_id, "title": title}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{user_id}/tasks")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    // Same created_at second is possible; the id tie-breaker keeps newest first.
    assert_eq!(tasks[0]["title"], "second");
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_payment_returns_200(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/payments",
        json!({"user_id": user_id, "amount": 125.50}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["payment"]["amount"], 125.50);
    assert_eq!(body["payment"]["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_payment_amount_returns_400(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/payments",
        json!({"user_id": user_id, "amount": -10.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_user_payments(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/payments",
        json!({"user_id": user_id, "amount": 42.0}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{user_id}/payments")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["payments"].as_array().unwrap().len(), 1);
}
