//! Handlers for workplace analysis.

use axum::extract::{Query, State};
use axum::Json;
use gigpay_ai::{generate_json, Generation};
use gigpay_core::insight::workplace;
use gigpay_core::types::{DbId, Timestamp};
use gigpay_db::repositories::InsightRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::handlers::{encode_json, required};
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Option<DbId>,
    pub analysis_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<DbId>,
}

#[derive(Serialize)]
pub struct AnalysisPayload {
    pub analysis: workplace::WorkplaceAnalysis,
}

/// One stored analysis with its payload re-inflated from JSON.
#[derive(Serialize)]
pub struct HistoryItem {
    pub id: DbId,
    pub analysis: Value,
    pub created_at: Timestamp,
}

#[derive(Serialize)]
pub struct AnalysisHistoryPayload {
    pub analyses: Vec<HistoryItem>,
}

/// POST /api/v1/workplace-analysis
pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<ApiSuccess<AnalysisPayload>>> {
    let user_id = required(input.user_id, "user_id")?;
    let analysis_data = required(input.analysis_data, "analysis_data")?;
    require_user(&state, user_id).await?;

    let input_json = encode_json(&analysis_data)?;

    let payload = generate_json(
        state.ai_client(),
        Generation {
            feature: "workplace_analysis",
            system: workplace::SYSTEM_PROMPT,
            user: workplace::user_prompt(&input_json),
            temperature: workplace::TEMPERATURE,
            max_tokens: workplace::MAX_TOKENS,
        },
        workplace::fallback,
    )
    .await;

    InsightRepo::insert_analysis(&state.pool, user_id, &input_json, &encode_json(&payload)?)
        .await?;

    Ok(Json(ApiSuccess::new(AnalysisPayload { analysis: payload })))
}

/// GET /api/v1/workplace-analysis/history?user_id=
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<ApiSuccess<AnalysisHistoryPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let analyses = InsightRepo::analyses_for_user(&state.pool, user_id)
        .await?
        .into_iter()
        .map(|record| HistoryItem {
            id: record.id,
            analysis: serde_json::from_str(&record.analysis)
                .unwrap_or(Value::String(record.analysis)),
            created_at: record.created_at,
        })
        .collect();

    Ok(Json(ApiSuccess::new(AnalysisHistoryPayload { analyses })))
}
