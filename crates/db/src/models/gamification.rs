//! Gamification models: achievement catalog, earned badges, leaderboard.

use gigpay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `achievements` catalog table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub points: i64,
    pub criteria: Option<String>,
    pub created_at: Timestamp,
}

/// A `user_badges` row joined with its achievement metadata.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EarnedBadge {
    pub id: DbId,
    pub achievement_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub points: i64,
    pub earned_at: Timestamp,
}

/// A `leaderboard_stats` row joined with user identity, plus the rank
/// assigned by the ranked query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub total_points: i64,
    pub tasks_completed: i64,
    pub streak_days: i64,
    pub updated_at: Timestamp,
}
