//! Call-with-fallback orchestration shared by every AI feature.
//!
//! Per call: no credential → fallback without network I/O; credential
//! present → one bounded request; call failure or schema-decode failure →
//! fallback. The caller always receives a payload of the expected type
//! and never an error.

use serde::de::DeserializeOwned;

use crate::client::GroqClient;

/// One feature's generation request. Each call site owns its temperature
/// and token budget as tuning constants.
pub struct Generation<'a> {
    /// Feature tag used in log lines (e.g. `"predictions"`).
    pub feature: &'a str,
    pub system: &'a str,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Generate a JSON payload decoded strictly into `T`, or fall back.
pub async fn generate_json<T: DeserializeOwned>(
    client: Option<&GroqClient>,
    gen: Generation<'_>,
    fallback: impl FnOnce() -> T,
) -> T {
    let Some(client) = client else {
        tracing::debug!(feature = gen.feature, "No AI credential configured, using fallback");
        return fallback();
    };

    match client
        .chat(gen.system, &gen.user, gen.temperature, gen.max_tokens)
        .await
    {
        Ok(raw) => match decode_payload(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    feature = gen.feature,
                    error = %e,
                    "AI response failed schema validation, using fallback"
                );
                fallback()
            }
        },
        Err(e) => {
            tracing::warn!(feature = gen.feature, error = %e, "AI call failed, using fallback");
            fallback()
        }
    }
}

/// Generate a free-text reply, or fall back. No schema is applied.
pub async fn generate_text(
    client: Option<&GroqClient>,
    gen: Generation<'_>,
    fallback: impl FnOnce() -> String,
) -> String {
    let Some(client) = client else {
        tracing::debug!(feature = gen.feature, "No AI credential configured, using fallback");
        return fallback();
    };

    match client
        .chat(gen.system, &gen.user, gen.temperature, gen.max_tokens)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(feature = gen.feature, error = %e, "AI call failed, using fallback");
            fallback()
        }
    }
}

/// Decode a model response into the feature's schema.
///
/// Hosted models frequently wrap JSON output in a Markdown code fence, so
/// one is tolerated; any other deviation from the schema is a failure.
fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(strip_code_fence(raw))
}

/// Strip a surrounding Markdown code fence (```json ... ```), if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    match inner.split_once('\n') {
        Some((first_line, body)) if first_line.trim().chars().all(char::is_alphanumeric) => {
            body.trim()
        }
        _ => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i64,
    }

    // -----------------------------------------------------------------------
    // Code fence stripping
    // -----------------------------------------------------------------------

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_code_fence(r#"{"value": 1}"#), r#"{"value": 1}"#);
    }

    #[test]
    fn fence_with_language_tag_is_stripped() {
        let raw = "```json\n{\"value\": 1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"value\": 1}");
    }

    #[test]
    fn fence_without_language_tag_is_stripped() {
        let raw = "```\n{\"value\": 1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"value\": 1}");
    }

    // -----------------------------------------------------------------------
    // Schema decoding
    // -----------------------------------------------------------------------

    #[test]
    fn decode_accepts_valid_payload() {
        let p: Payload = decode_payload(r#"{"value": 7}"#).unwrap();
        assert_eq!(p, Payload { value: 7 });
    }

    #[test]
    fn decode_rejects_prose() {
        assert!(decode_payload::<Payload>("Here is your forecast!").is_err());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_payload::<Payload>(r#"{"other": 7}"#).is_err());
    }

    // -----------------------------------------------------------------------
    // Fallback paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn missing_credential_uses_fallback_without_io() {
        let gen = Generation {
            feature: "test",
            system: "s",
            user: "u".to_string(),
            temperature: 0.5,
            max_tokens: 16,
        };
        let value = generate_json(None, gen, || Payload { value: 42 }).await;
        assert_eq!(value, Payload { value: 42 });
    }

    #[tokio::test]
    async fn missing_credential_text_uses_fallback() {
        let gen = Generation {
            feature: "test",
            system: "s",
            user: "u".to_string(),
            temperature: 0.7,
            max_tokens: 16,
        };
        let text = generate_text(None, gen, || "canned".to_string()).await;
        assert_eq!(text, "canned");
    }
}
