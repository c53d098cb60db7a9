//! Repositories for the append-only AI audit-trail tables.

use gigpay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::insight::{
    AnomalyRecord, InsightRecord, PredictionRecord, WorkplaceAnalysisRecord,
};

/// Provides the append paths and bounded reads for AI outputs.
///
/// All writes here are inserts; rows are never updated or deleted.
pub struct InsightRepo;

impl InsightRepo {
    /// Record a prediction payload.
    pub async fn insert_prediction(
        pool: &SqlitePool,
        user_id: DbId,
        prediction_type: &str,
        data: &str,
        confidence: f64,
    ) -> Result<PredictionRecord, sqlx::Error> {
        sqlx::query_as::<_, PredictionRecord>(
            "INSERT INTO predictions (user_id, prediction_type, data, confidence) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, prediction_type, data, confidence, created_at",
        )
        .bind(user_id)
        .bind(prediction_type)
        .bind(data)
        .bind(confidence)
        .fetch_one(pool)
        .await
    }

    /// Count of stored predictions for a user.
    pub async fn prediction_count(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM predictions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Record one detected anomaly.
    pub async fn insert_anomaly(
        pool: &SqlitePool,
        user_id: DbId,
        anomaly_type: &str,
        severity: &str,
        description: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO anomalies (user_id, anomaly_type, severity, description) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(anomaly_type)
        .bind(severity)
        .bind(description)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The user's most recently detected anomalies, bounded.
    pub async fn recent_anomalies(
        pool: &SqlitePool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<AnomalyRecord>, sqlx::Error> {
        sqlx::query_as::<_, AnomalyRecord>(
            "SELECT id, user_id, anomaly_type, severity, description, detected_at \
             FROM anomalies WHERE user_id = $1 \
             ORDER BY detected_at DESC, id DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Record a generic insight payload (e.g. sentiment analysis).
    pub async fn insert_insight(
        pool: &SqlitePool,
        user_id: DbId,
        insight_type: &str,
        data: &str,
        confidence: f64,
    ) -> Result<InsightRecord, sqlx::Error> {
        sqlx::query_as::<_, InsightRecord>(
            "INSERT INTO ai_insights (user_id, insight_type, data, confidence) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, insight_type, data, confidence, created_at",
        )
        .bind(user_id)
        .bind(insight_type)
        .bind(data)
        .bind(confidence)
        .fetch_one(pool)
        .await
    }

    /// Record a workplace analysis with the input that produced it.
    pub async fn insert_analysis(
        pool: &SqlitePool,
        user_id: DbId,
        input_data: &str,
        analysis: &str,
    ) -> Result<WorkplaceAnalysisRecord, sqlx::Error> {
        sqlx::query_as::<_, WorkplaceAnalysisRecord>(
            "INSERT INTO workplace_analyses (user_id, input_data, analysis) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_id, input_data, analysis, created_at",
        )
        .bind(user_id)
        .bind(input_data)
        .bind(analysis)
        .fetch_one(pool)
        .await
    }

    /// A user's workplace analyses, newest first.
    pub async fn analyses_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<WorkplaceAnalysisRecord>, sqlx::Error> {
        sqlx::query_as::<_, WorkplaceAnalysisRecord>(
            "SELECT id, user_id, input_data, analysis, created_at \
             FROM workplace_analyses WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
