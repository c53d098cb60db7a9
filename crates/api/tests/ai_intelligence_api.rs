//! Integration tests for the AI intelligence endpoints.
//!
//! No AI credential is configured in most tests, so responses are the
//! deterministic fallback payloads; the stub-server tests exercise the
//! parse-failure path with a live (local) upstream.

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{body_json, get};
use gigpay_ai::GroqClient;
use gigpay_db::repositories::InsightRepo;
use serde_json::json;
use sqlx::SqlitePool;

/// Spawn a local chat-completions stub that always answers with `content`.
///
/// Returns the base URL to point a `GroqClient` at.
async fn spawn_completions_stub(content: &'static str) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            Json(json!({
                "choices": [{"message": {"content": content}}]
            }))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn stub_client(base_url: String) -> GroqClient {
    GroqClient::new("test-key".to_string(), base_url, "test-model".to_string()).unwrap()
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn predictions_without_user_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/ai/predictions").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn predictions_fallback_is_deterministic_and_persisted(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let mut payloads = Vec::new();
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/ai/predictions?user_id={user_id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        payloads.push(body_json(response).await);
    }

    // Two fallback responses are identical.
    assert_eq!(payloads[0], payloads[1]);
    let forecast = payloads[0]["predictions"]["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 7);
    assert_eq!(forecast[0]["day"], "Monday");
    assert_eq!(forecast[0]["predicted_tasks"], 5);

    // One audit row per call.
    let stored = InsightRepo::prediction_count(&pool, user_id).await.unwrap();
    assert_eq!(stored, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn prediction_rows_record_first_forecast_confidence(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool.clone());
    get(app, &format!("/api/v1/ai/predictions?user_id={user_id}")).await;

    let (prediction_type, confidence): (String, f64) = sqlx::query_as(
        "SELECT prediction_type, confidence FROM predictions WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(prediction_type, "task_completion");
    assert_eq!(confidence, 0.85);
}

// ---------------------------------------------------------------------------
// Anomalies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn anomalies_fallback_persists_each_finding(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/ai/anomalies?user_id={user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let anomalies = body["anomalies"].as_array().unwrap();
    assert_eq!(anomalies.len(), 2);

    // Findings accumulate: a second call stores two more rows.
    let app = common::build_test_app(pool.clone());
    get(app, &format!("/api/v1/ai/anomalies?user_id={user_id}")).await;

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM anomalies WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 4);
}

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sentiment_with_no_history_is_neutral_and_stores_nothing(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/ai/sentiment?user_id={user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["sentiment"]["overall"], "neutral");
    assert_eq!(body["sentiment"]["score"], 0.5);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ai_insights WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sentiment_with_history_persists_an_insight(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;
    common::seed_chat_message(&pool, user_id, "Loving the new payment flow!").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/ai/sentiment?user_id={user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["sentiment"]["overall"], "positive");
    assert_eq!(body["sentiment"]["breakdown"]["positive"], 60);

    let (insight_type, confidence): (String, f64) = sqlx::query_as(
        "SELECT insight_type, confidence FROM ai_insights WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(insight_type, "sentiment_analysis");
    assert_eq!(confidence, 0.72);
}

// ---------------------------------------------------------------------------
// Upstream failure handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unparseable_upstream_body_falls_back(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    // The stub answers 200 with prose instead of the expected JSON schema.
    let base_url = spawn_completions_stub("Sure! Here is your forecast, in plain words.").await;
    let client = stub_client(base_url);

    let app = common::build_test_app_with_ai(pool.clone(), Some(client));
    let response = get(app, &format!("/api/v1/ai/predictions?user_id={user_id}")).await;

    // The caller still gets a 200 with the full fallback payload.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["predictions"]["forecast"].as_array().unwrap().len(), 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_upstream_json_is_used_verbatim(pool: SqlitePool) {
    let user_id = common::seed_user(&pool, "Ada", "ada@example.com").await;

    let base_url = spawn_completions_stub(
        r#"{"forecast": [{"day": "Monday", "predicted_tasks": 9, "confidence": 0.99}], "insights": ["Strong week ahead"]}"#,
    )
    .await;
    let client = stub_client(base_url);

    let app = common::build_test_app_with_ai(pool.clone(), Some(client));
    let response = get(app, &format!("/api/v1/ai/predictions?user_id={user_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["predictions"]["forecast"][0]["predicted_tasks"], 9);
    assert_eq!(body["predictions"]["insights"][0], "Strong week ahead");

    // The stored confidence comes from the model's first forecast entry.
    let confidence: f64 =
        sqlx::query_scalar("SELECT confidence FROM predictions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(confidence, 0.99);
}
