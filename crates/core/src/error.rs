//! Domain error taxonomy shared across crates.

use crate::types::DbId;

/// A domain-level error.
///
/// The API crate maps these onto HTTP statuses: `Validation` → 400,
/// `NotFound` → 404, `Conflict` → 409, `Internal` → 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a supplied value is invalid.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint would be violated.
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
