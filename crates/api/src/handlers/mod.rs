//! Request handlers, one module per resource.

pub mod ai_intelligence;
pub mod chat;
pub mod gamification;
pub mod payments;
pub mod tasks;
pub mod users;
pub mod workplace;

use crate::error::AppError;

/// Require a non-blank text field, or fail with 400.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::bad_request(format!("{field} is required"))),
    }
}

/// Require a field to be present, or fail with 400.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::bad_request(format!("{field} is required")))
}

/// Serialize a value to a JSON string for prompt context or persistence.
pub(crate) fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Internal(e.to_string()))
}
