//! Handlers for achievements and the leaderboard.

use axum::extract::{Query, State};
use axum::Json;
use gigpay_core::gamification;
use gigpay_core::streak;
use gigpay_core::types::DbId;
use gigpay_db::models::gamification::{Achievement, EarnedBadge, LeaderboardEntry};
use gigpay_db::repositories::{AchievementRepo, LeaderboardRepo, TaskRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::required;
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

/// Default and maximum leaderboard page sizes.
const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct AchievementsQuery {
    pub user_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

/// Aggregate counters shown alongside the badge list.
#[derive(Serialize)]
pub struct AchievementStats {
    pub tasks_completed: i64,
    pub total_achievements: i64,
    pub total_points: i64,
}

#[derive(Serialize)]
pub struct AchievementsPayload {
    /// Badges the user holds, newest first.
    pub achievements: Vec<EarnedBadge>,
    /// The full catalog, highest-value first.
    pub available: Vec<Achievement>,
    pub stats: AchievementStats,
}

#[derive(Serialize)]
pub struct LeaderboardPayload {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// GET /api/v1/achievements?user_id=
///
/// Evaluates award criteria against the user's current aggregates before
/// responding, so a badge earned by the user's latest completions appears
/// in the same response. Awarding is idempotent; repeat calls never
/// duplicate a badge.
pub async fn achievements(
    State(state): State<AppState>,
    Query(params): Query<AchievementsQuery>,
) -> AppResult<Json<ApiSuccess<AchievementsPayload>>> {
    let user_id = required(params.user_id, "user_id")?;
    require_user(&state, user_id).await?;

    let tasks_completed = TaskRepo::completed_count(&state.pool, user_id).await?;
    let available = AchievementRepo::catalog(&state.pool).await?;

    for achievement in &available {
        // Only task-count criteria are satisfiable from stored aggregates;
        // the rest of the catalog is display-only for now.
        let Some(threshold) = gamification::tasks_threshold(achievement.criteria.as_deref())
        else {
            continue;
        };
        if gamification::meets_task_threshold(tasks_completed, threshold) {
            let newly_awarded =
                AchievementRepo::award(&state.pool, user_id, achievement.id).await?;
            if newly_awarded {
                tracing::info!(user_id, achievement = %achievement.name, "Achievement unlocked");
            }
        }
    }

    let achievements = AchievementRepo::badges_for_user(&state.pool, user_id).await?;
    let stats = AchievementStats {
        tasks_completed,
        total_achievements: achievements.len() as i64,
        total_points: achievements.iter().map(|b| b.points).sum(),
    };

    Ok(Json(ApiSuccess::new(AchievementsPayload {
        achievements,
        available,
        stats,
    })))
}

/// GET /api/v1/leaderboard?limit=
///
/// Recomputes every user's stats from the source tables on each read, then
/// serves the ranked result. The aggregate reads are side-effect free; all
/// upserts run inside one transaction so a failed refresh never leaves the
/// table half-updated.
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<ApiSuccess<LeaderboardPayload>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let users = UserRepo::list(&state.pool).await?;

    let mut stats = Vec::with_capacity(users.len());
    for user in &users {
        let badge_points = AchievementRepo::badge_points(&state.pool, user.id).await?;
        let tasks_completed = TaskRepo::completed_count(&state.pool, user.id).await?;
        let completion_days = TaskRepo::completion_days(&state.pool, user.id).await?;

        stats.push((
            user.id,
            gamification::total_points(badge_points, tasks_completed),
            tasks_completed,
            streak::streak_days(&completion_days),
        ));
    }

    let mut tx = state.pool.begin().await?;
    for (user_id, total_points, tasks_completed, streak_days) in &stats {
        LeaderboardRepo::upsert(&mut tx, *user_id, *total_points, *tasks_completed, *streak_days)
            .await?;
    }
    tx.commit().await?;

    let leaderboard = LeaderboardRepo::ranked(&state.pool, limit).await?;
    Ok(Json(ApiSuccess::new(LeaderboardPayload { leaderboard })))
}
