use std::sync::Arc;

use gigpay_ai::GroqClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gigpay_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Groq client; `None` when no credential is configured, in which case
    /// every AI feature serves its fallback payload.
    pub ai: Option<Arc<GroqClient>>,
}

impl AppState {
    /// The AI client as a borrowed option, the shape the wrapper expects.
    pub fn ai_client(&self) -> Option<&GroqClient> {
        self.ai.as_deref()
    }
}
