use serde::Serialize;

/// Success envelope: `{"success": true, ...payload}`.
///
/// The payload's own fields are flattened to the top level, so a handler
/// returning `ApiSuccess::new(UserPayload { user })` serializes as
/// `{"success": true, "user": {...}}`.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        user: &'static str,
    }

    #[test]
    fn payload_fields_are_flattened() {
        let value = serde_json::to_value(ApiSuccess::new(Payload { user: "ada" })).unwrap();
        assert_eq!(value, json!({"success": true, "user": "ada"}));
    }
}
