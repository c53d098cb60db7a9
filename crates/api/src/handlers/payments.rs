//! Handlers for the `/payments` resource.

use axum::extract::State;
use axum::Json;
use gigpay_core::types::DbId;
use gigpay_db::models::payment::{CreatePayment, Payment};
use gigpay_db::repositories::PaymentRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::required;
use crate::handlers::users::require_user;
use crate::response::ApiSuccess;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub user_id: Option<DbId>,
    pub amount: Option<f64>,
}

#[derive(Serialize)]
pub struct PaymentPayload {
    pub payment: Payment,
}

/// POST /api/v1/payments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePaymentRequest>,
) -> AppResult<Json<ApiSuccess<PaymentPayload>>> {
    let user_id = required(input.user_id, "user_id")?;
    let amount = required(input.amount, "amount")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::bad_request("amount must be a positive number"));
    }
    require_user(&state, user_id).await?;

    let payment = PaymentRepo::create(&state.pool, &CreatePayment { user_id, amount }).await?;

    Ok(Json(ApiSuccess::new(PaymentPayload { payment })))
}
