//! AI output audit-trail models.
//!
//! These tables are append-only: every AI feature call stores its resulting
//! payload (success or fallback) before the HTTP response is produced.

use gigpay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `predictions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PredictionRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub prediction_type: String,
    pub data: String,
    pub confidence: f64,
    pub created_at: Timestamp,
}

/// A row from the `anomalies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnomalyRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub anomaly_type: String,
    pub severity: String,
    pub description: String,
    pub detected_at: Timestamp,
}

/// A row from the `ai_insights` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InsightRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub insight_type: String,
    pub data: String,
    pub confidence: f64,
    pub created_at: Timestamp,
}

/// A row from the `workplace_analyses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkplaceAnalysisRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub input_data: String,
    pub analysis: String,
    pub created_at: Timestamp,
}
