//! Task entity models and DTOs.

use gigpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Task status values stored in `tasks.status`.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
}

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for submitting a task.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
}
