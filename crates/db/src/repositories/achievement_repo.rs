//! Repository for the achievement catalog and earned badges.

use gigpay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::gamification::{Achievement, EarnedBadge};

const CATALOG_COLUMNS: &str = "id, name, description, icon, points, criteria, created_at";

/// Provides read access to the catalog and the award path for badges.
pub struct AchievementRepo;

impl AchievementRepo {
    /// The full achievement catalog, highest-value first.
    pub async fn catalog(pool: &SqlitePool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM achievements ORDER BY points DESC, id ASC"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .fetch_all(pool)
            .await
    }

    /// A user's earned badges joined with achievement metadata, newest first.
    pub async fn badges_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<EarnedBadge>, sqlx::Error> {
        sqlx::query_as::<_, EarnedBadge>(
            "SELECT ub.id, ub.achievement_id, a.name, a.description, a.icon, \
                    a.points, ub.earned_at \
             FROM user_badges ub \
             JOIN achievements a ON a.id = ub.achievement_id \
             WHERE ub.user_id = $1 \
             ORDER BY ub.earned_at DESC, ub.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Award a badge exactly once per (user, achievement) pair.
    ///
    /// The `UNIQUE(user_id, achievement_id)` constraint plus
    /// `ON CONFLICT DO NOTHING` makes repeated calls idempotent without a
    /// separate existence check. Returns `true` if a new badge row was
    /// created.
    pub async fn award(
        pool: &SqlitePool,
        user_id: DbId,
        achievement_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_badges (user_id, achievement_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, achievement_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(achievement_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum of points across a user's held badges (0 if none).
    pub async fn badge_points(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(a.points), 0) \
             FROM user_badges ub \
             JOIN achievements a ON a.id = ub.achievement_id \
             WHERE ub.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
