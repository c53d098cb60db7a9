//! Payment entity models and DTOs.

use gigpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub user_id: DbId,
    pub amount: f64,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a payment.
#[derive(Debug, Deserialize)]
pub struct CreatePayment {
    pub user_id: DbId,
    pub amount: f64,
}
