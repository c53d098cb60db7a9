//! HTTP client for an OpenAI-compatible chat completions endpoint.
//!
//! [`GroqClient`] holds the credential, base URL, and model name for the
//! hosted text-generation service. One client is constructed at process
//! start (if `GROQ_API_KEY` is set) and carried in the application state;
//! handlers never read environment variables themselves.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint (OpenAI-compatible).
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model used for every feature.
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Upstream calls that outlive this window count as failures and follow
/// the fallback path.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from a single upstream call.
///
/// These are absorbed by the wrapper layer and never reach HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body carried no completion content.
    #[error("Upstream response contained no content")]
    EmptyResponse,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the hosted text-generation service.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Build a client with an explicit credential, base URL, and model.
    pub fn new(api_key: String, base_url: String, model: String) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
            model,
        })
    }

    /// Build a client from the environment.
    ///
    /// Returns `None` when `GROQ_API_KEY` is unset: every feature then uses
    /// its fallback payload and no network I/O is attempted.
    /// `GROQ_BASE_URL` and `GROQ_MODEL` override the defaults.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty())?;
        let base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        match Self::new(api_key, base_url, model) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build Groq client");
                None
            }
        }
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one chat completion and return the raw assistant text.
    pub async fn chat(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, AiError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status(status));
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(AiError::EmptyResponse)
    }
}
