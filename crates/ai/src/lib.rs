//! Groq chat-completions client and the call-with-fallback wrapper.
//!
//! Every AI-enhanced feature in the platform routes through this crate:
//! one bounded request to the hosted model when a credential is
//! configured, and a deterministic feature-specific fallback otherwise.
//! Upstream failures never escape this crate.

pub mod client;
pub mod wrapper;

pub use client::{AiError, GroqClient};
pub use wrapper::{generate_json, generate_text, Generation};
