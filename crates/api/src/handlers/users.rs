//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use gigpay_core::error::CoreError;
use gigpay_core::types::DbId;
use gigpay_db::models::payment::Payment;
use gigpay_db::models::task::Task;
use gigpay_db::models::user::{CreateUser, User};
use gigpay_db::repositories::{PaymentRepo, TaskRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::required_text;
use crate::response::ApiSuccess;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Serialize)]
pub struct TasksPayload {
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
pub struct PaymentsPayload {
    pub payments: Vec<Payment>,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<ApiSuccess<UserPayload>>> {
    let name = required_text(input.name, "name")?;
    let email = required_text(input.email, "email")?;

    // A duplicate email surfaces as a unique-constraint error mapped to 409.
    let user = UserRepo::create(&state.pool, &CreateUser { name, email }).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(Json(ApiSuccess::new(UserPayload { user })))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiSuccess<UserPayload>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?;
    Ok(Json(ApiSuccess::new(UserPayload { user })))
}

/// GET /api/v1/users/{id}/tasks
pub async fn tasks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiSuccess<TasksPayload>>> {
    require_user(&state, id).await?;
    let tasks = TaskRepo::list_for_user(&state.pool, id).await?;
    Ok(Json(ApiSuccess::new(TasksPayload { tasks })))
}

/// GET /api/v1/users/{id}/payments
pub async fn payments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiSuccess<PaymentsPayload>>> {
    require_user(&state, id).await?;
    let payments = PaymentRepo::list_for_user(&state.pool, id).await?;
    Ok(Json(ApiSuccess::new(PaymentsPayload { payments })))
}

/// 404 unless the user exists.
pub(crate) async fn require_user(state: &AppState, id: DbId) -> AppResult<User> {
    Ok(UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?)
}
