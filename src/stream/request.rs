//! Chat request extraction from API Gateway events.
//!
//! Parsing is deliberately fail-safe: a missing, malformed, or undecodable
//! body falls back to an empty object, and a missing or blank message falls
//! back to the default prompt. A bad request never fails the invocation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::Value;

/// Prompt used when the request carries no usable message.
pub const DEFAULT_MESSAGE: &str = "hello streaming";

#[derive(Debug, Default, Deserialize)]
struct ChatBody {
    message: Option<Value>,
}

/// One chat turn extracted from the invocation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn from_event(payload: &Value) -> Self {
        let raw = decode_body(payload).unwrap_or_else(|| "{}".to_string());
        let body: ChatBody = serde_json::from_str(&raw).unwrap_or_default();

        let message = body
            .message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map_or_else(|| DEFAULT_MESSAGE.to_string(), ToString::to_string);

        Self { message }
    }
}

/// Returns the request body as text, honoring `isBase64Encoded`.
fn decode_body(payload: &Value) -> Option<String> {
    let body = payload.get("body")?.as_str()?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        let bytes = BASE64.decode(body).ok()?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    } else {
        Some(body.to_string())
    }
}
