//! Repository for the `leaderboard_stats` materialized aggregate.

use gigpay_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::gamification::LeaderboardEntry;

/// Provides the upsert and ranked-read paths for leaderboard stats.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Upsert one user's stats row with precomputed values.
    ///
    /// `ON CONFLICT(user_id) DO UPDATE` keeps the refresh atomic; there is
    /// no read-modify-write on the stats row itself. Takes a connection so
    /// the recomputation loop can run every upsert inside one transaction.
    pub async fn upsert(
        conn: &mut SqliteConnection,
        user_id: DbId,
        total_points: i64,
        tasks_completed: i64,
        streak_days: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO leaderboard_stats \
                 (user_id, total_points, tasks_completed, streak_days, updated_at) \
             VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 total_points = excluded.total_points, \
                 tasks_completed = excluded.tasks_completed, \
                 streak_days = excluded.streak_days, \
                 updated_at = CURRENT_TIMESTAMP",
        )
        .bind(user_id)
        .bind(total_points)
        .bind(tasks_completed)
        .bind(streak_days)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// The ranked leaderboard: stats joined with user identity.
    ///
    /// Ordered by `total_points DESC`, ties broken by `user_id ASC` so the
    /// ordering (and the ranks derived from it) is deterministic.
    pub async fn ranked(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT \
                 ROW_NUMBER() OVER (ORDER BY ls.total_points DESC, ls.user_id ASC) AS rank, \
                 ls.user_id, \
                 u.name, \
                 u.email, \
                 ls.total_points, \
                 ls.tasks_completed, \
                 ls.streak_days, \
                 ls.updated_at \
             FROM leaderboard_stats ls \
             JOIN users u ON u.id = ls.user_id \
             ORDER BY ls.total_points DESC, ls.user_id ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
