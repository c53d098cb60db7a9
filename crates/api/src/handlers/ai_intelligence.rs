//! Handlers for the AI intelligence endpoints (predictions, anomalies,
//! sentiment).
//!
//! Each handler follows the same shape: gather prompt context from the
//! database, run the call-with-fallback wrapper, persist the resulting
//! payload, respond. Upstream failures never surface; the response is
//! always a valid payload of the feature's schema.

use axum::extract::{Query, State};
use axum::Json;
use gigpay_ai::{generate_json, Generation};
use gigpay_core::insight::{anomalies, predictions, sentiment};
use gigpay_core::types::DbId;
use gigpay_db::models::insight::AnomalyRecord;
use gigpay_db::repositories::{ChatRepo, InsightRepo, PaymentRepo, TaskRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::{encode_json, required};
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

/// How much history feeds each prompt.
const PREDICTION_TASK_CONTEXT: i64 = 20;
const ANOMALY_TASK_CONTEXT: i64 = 50;
const ANOMALY_PAYMENT_CONTEXT: i64 = 30;
const ANOMALY_PROMPT_SAMPLE: usize = 10;
const SENTIMENT_MESSAGE_CONTEXT: i64 = 30;
const ANOMALY_RESPONSE_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<DbId>,
}

#[derive(Serialize)]
pub struct PredictionsPayload {
    pub predictions: predictions::Predictions,
}

#[derive(Serialize)]
pub struct AnomaliesPayload {
    pub anomalies: Vec<AnomalyRecord>,
}

#[derive(Serialize)]
pub struct SentimentPayload {
    pub sentiment: sentiment::Sentiment,
}

/// GET /api/v1/ai/predictions?user_id=
pub async fn predictions(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<ApiSuccess<PredictionsPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let tasks = TaskRepo::recent(&state.pool, user_id, PREDICTION_TASK_CONTEXT).await?;
    let tasks_json = encode_json(&tasks)?;

    let payload = generate_json(
        state.ai_client(),
        Generation {
            feature: "predictions",
            system: predictions::SYSTEM_PROMPT,
            user: predictions::user_prompt(&tasks_json),
            temperature: predictions::TEMPERATURE,
            max_tokens: predictions::MAX_TOKENS,
        },
        predictions::fallback,
    )
    .await;

    InsightRepo::insert_prediction(
        &state.pool,
        user_id,
        "task_completion",
        &encode_json(&payload)?,
        payload.confidence(),
    )
    .await?;

    Ok(Json(ApiSuccess::new(PredictionsPayload {
        predictions: payload,
    })))
}

/// GET /api/v1/ai/anomalies?user_id=
///
/// Persists each reported anomaly, then responds with the most recently
/// stored ones so the client sees findings accumulate across calls.
pub async fn anomalies(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<ApiSuccess<AnomaliesPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let tasks = TaskRepo::recent(&state.pool, user_id, ANOMALY_TASK_CONTEXT).await?;
    let payments = PaymentRepo::recent(&state.pool, user_id, ANOMALY_PAYMENT_CONTEXT).await?;

    let task_sample = &tasks[..tasks.len().min(ANOMALY_PROMPT_SAMPLE)];
    let payment_sample = &payments[..payments.len().min(ANOMALY_PROMPT_SAMPLE)];
    let tasks_json = encode_json(&task_sample)?;
    let payments_json = encode_json(&payment_sample)?;

    let report = generate_json(
        state.ai_client(),
        Generation {
            feature: "anomalies",
            system: anomalies::SYSTEM_PROMPT,
            user: anomalies::user_prompt(&tasks_json, &payments_json),
            temperature: anomalies::TEMPERATURE,
            max_tokens: anomalies::MAX_TOKENS,
        },
        anomalies::fallback,
    )
    .await;

    for finding in &report.anomalies {
        InsightRepo::insert_anomaly(
            &state.pool,
            user_id,
            &finding.anomaly_type,
            finding.severity.as_str(),
            &finding.description,
        )
        .await?;
    }

    let stored =
        InsightRepo::recent_anomalies(&state.pool, user_id, ANOMALY_RESPONSE_LIMIT).await?;
    Ok(Json(ApiSuccess::new(AnomaliesPayload { anomalies: stored })))
}

/// GET /api/v1/ai/sentiment?user_id=
pub async fn sentiment(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<ApiSuccess<SentimentPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let messages = ChatRepo::recent(&state.pool, user_id, SENTIMENT_MESSAGE_CONTEXT).await?;

    // No history means nothing to analyze: serve a neutral payload and
    // store nothing.
    if messages.is_empty() {
        return Ok(Json(ApiSuccess::new(SentimentPayload {
            sentiment: sentiment::empty_history(),
        })));
    }

    let texts: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
    let messages_json = encode_json(&texts)?;

    let payload = generate_json(
        state.ai_client(),
        Generation {
            feature: "sentiment",
            system: sentiment::SYSTEM_PROMPT,
            user: sentiment::user_prompt(&messages_json),
            temperature: sentiment::TEMPERATURE,
            max_tokens: sentiment::MAX_TOKENS,
        },
        sentiment::fallback,
    )
    .await;

    InsightRepo::insert_insight(
        &state.pool,
        user_id,
        "sentiment_analysis",
        &encode_json(&payload)?,
        payload.score,
    )
    .await?;

    Ok(Json(ApiSuccess::new(SentimentPayload { sentiment: payload })))
}
