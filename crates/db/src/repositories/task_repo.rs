//! Repository for the `tasks` table.

use chrono::NaiveDate;
use gigpay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::task::{status, CreateTask, Task};

const COLUMNS: &str = "id, user_id, title, description, status, completed_at, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task with status `pending`, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, title, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Mark a task completed, stamping `completed_at`.
    ///
    /// Returns `None` if no task with the given ID exists. Completing an
    /// already-completed task refreshes the stamp; callers treat it as a
    /// no-op success.
    pub async fn complete(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks \
             SET status = $2, completed_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status::COMPLETED)
            .fetch_optional(pool)
            .await
    }

    /// List a user's tasks, newest first.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// The user's most recent tasks, bounded, newest first.
    ///
    /// Used to build AI prompt context.
    pub async fn recent(
        pool: &SqlitePool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count of the user's completed tasks.
    pub async fn completed_count(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(status::COMPLETED)
        .fetch_one(pool)
        .await
    }

    /// Distinct UTC calendar days on which the user completed a task.
    ///
    /// Feeds the streak computation.
    pub async fn completion_days(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT DATE(completed_at) FROM tasks \
             WHERE user_id = $1 AND status = $2 AND completed_at IS NOT NULL",
        )
        .bind(user_id)
        .bind(status::COMPLETED)
        .fetch_all(pool)
        .await
    }
}
