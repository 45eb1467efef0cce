//! Server-Sent Events frame builders for the streaming chat response.
//!
//! The wire format mirrors what SSE consumers expect: one `data:` line per
//! frame, frames separated by a blank line, `[DONE]` as the end-of-stream
//! signal and `[ERROR] <message>` for failures after streaming has started.

use http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONNECTION, CONTENT_TYPE, HeaderMap, HeaderValue,
};

/// End-of-stream frame sent after a successful model run.
pub const DONE_FRAME: &str = "data: [DONE]\n\n";

/// Wraps one model output token in an SSE data frame.
#[must_use]
pub fn data_frame(token: &str) -> String {
    format!("data: {token}\n\n")
}

/// Builds the error frame emitted when streaming fails midway.
#[must_use]
pub fn error_frame(message: &str) -> String {
    format!("data: [ERROR] {message}\n\n")
}

/// Response headers for the streaming prelude.
#[must_use]
pub fn response_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/event-stream; charset=utf-8"),
    );
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-transform"),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers
}
