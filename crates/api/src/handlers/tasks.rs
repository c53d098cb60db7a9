//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::Json;
use gigpay_core::error::CoreError;
use gigpay_core::types::DbId;
use gigpay_db::models::task::{CreateTask, Task};
use gigpay_db::repositories::TaskRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::{required, required_text};
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub user_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct TaskPayload {
    pub task: Task,
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<Json<ApiSuccess<TaskPayload>>> {
    let user_id = required(input.user_id, "user_id")?;
    let title = required_text(input.title, "title")?;
    require_user(&state, user_id).await?;

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            user_id,
            title,
            description: input.description,
        },
    )
    .await?;

    Ok(Json(ApiSuccess::new(TaskPayload { task })))
}

/// POST /api/v1/tasks/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiSuccess<TaskPayload>>> {
    let task = TaskRepo::complete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "task", id })?;
    tracing::debug!(task_id = task.id, user_id = task.user_id, "Task completed");
    Ok(Json(ApiSuccess::new(TaskPayload { task })))
}
