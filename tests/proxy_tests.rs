use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chat_backend::api::proxy::{ProxyAdapter, RequestParts, proxy_response, target_url};
use chat_backend::core::config::{ApiConfig, EventLogMode};
use chat_backend::errors::HandlerError;
use serde_json::json;
use url::Url;

#[test]
fn extracts_v2_http_event() {
    let event = json!({
        "requestContext": { "http": { "method": "POST" } },
        "rawPath": "/api/chat",
        "rawQueryString": "a=1&b=two",
        "headers": { "content-type": "application/json" },
        "body": "{\"message\":\"hi\"}",
        "isBase64Encoded": false,
    });

    let parts = RequestParts::from_event(&event).unwrap();

    assert_eq!(parts.method, "POST");
    assert_eq!(parts.path, "/api/chat");
    assert_eq!(parts.query.as_deref(), Some("a=1&b=two"));
    assert_eq!(
        parts.headers,
        vec![("content-type".to_string(), "application/json".to_string())]
    );
    assert_eq!(parts.body.as_deref(), Some(b"{\"message\":\"hi\"}".as_slice()));
}

#[test]
fn extracts_v1_http_event() {
    let event = json!({
        "httpMethod": "GET",
        "path": "/health",
        "queryStringParameters": { "q": "hello world" },
    });

    let parts = RequestParts::from_event(&event).unwrap();

    assert_eq!(parts.method, "GET");
    assert_eq!(parts.path, "/health");
    assert_eq!(parts.query.as_deref(), Some("q=hello+world"));
    assert!(parts.headers.is_empty());
    assert!(parts.body.is_none());
}

#[test]
fn decodes_base64_body() {
    let event = json!({
        "httpMethod": "POST",
        "path": "/",
        "body": BASE64.encode("raw bytes"),
        "isBase64Encoded": true,
    });

    let parts = RequestParts::from_event(&event).unwrap();

    assert_eq!(parts.body.as_deref(), Some(b"raw bytes".as_slice()));
}

#[test]
fn rejects_invalid_base64_body() {
    let event = json!({
        "httpMethod": "POST",
        "body": "%%%",
        "isBase64Encoded": true,
    });

    let err = RequestParts::from_event(&event).unwrap_err();

    assert!(err.to_string().contains("invalid base64 body"));
}

#[test]
fn rejects_events_without_a_method() {
    let event = json!({ "Records": [{ "body": "not an http event" }] });

    let err = RequestParts::from_event(&event).unwrap_err();

    assert!(err.to_string().contains("missing method"));
}

#[test]
fn path_defaults_to_root() {
    let event = json!({ "httpMethod": "GET" });

    let parts = RequestParts::from_event(&event).unwrap();

    assert_eq!(parts.path, "/");
    assert!(parts.query.is_none());
}

#[test]
fn empty_raw_query_string_is_ignored() {
    let event = json!({
        "httpMethod": "GET",
        "rawPath": "/",
        "rawQueryString": "",
    });

    let parts = RequestParts::from_event(&event).unwrap();

    assert!(parts.query.is_none());
}

#[test]
fn text_response_passes_through() {
    let headers = vec![("content-type".to_string(), "text/plain".to_string())];

    let reply = proxy_response(201, &headers, b"created");

    assert_eq!(reply["statusCode"], 201);
    assert_eq!(reply["headers"]["content-type"], "text/plain");
    assert_eq!(reply["multiValueHeaders"]["content-type"], json!(["text/plain"]));
    assert_eq!(reply["body"], "created");
    assert_eq!(reply["isBase64Encoded"], false);
}

#[test]
fn binary_response_is_base64_encoded() {
    let body = [0xff_u8, 0xfe, 0x00, 0x01];

    let reply = proxy_response(200, &[], &body);

    assert_eq!(reply["isBase64Encoded"], true);
    assert_eq!(reply["body"], BASE64.encode(body));
}

#[test]
fn repeated_response_headers_are_kept() {
    let headers = vec![
        ("set-cookie".to_string(), "a=1".to_string()),
        ("set-cookie".to_string(), "b=2".to_string()),
        ("content-type".to_string(), "text/html".to_string()),
    ];

    let reply = proxy_response(200, &headers, b"");

    assert_eq!(reply["headers"]["set-cookie"], "a=1, b=2");
    assert_eq!(
        reply["multiValueHeaders"]["set-cookie"],
        json!(["a=1", "b=2"])
    );
    assert_eq!(reply["headers"]["content-type"], "text/html");
}

#[test]
fn target_url_keeps_base_path_prefix() {
    let base = Url::parse("http://app.internal/v1/").unwrap();

    let url = target_url(&base, "/api/chat");

    assert_eq!(url.as_str(), "http://app.internal/v1/api/chat");
}

#[test]
fn target_url_with_origin_only_base() {
    let base = Url::parse("http://app.internal").unwrap();

    assert_eq!(
        target_url(&base, "/api/chat").as_str(),
        "http://app.internal/api/chat"
    );
    assert_eq!(target_url(&base, "/").as_str(), "http://app.internal/");
}

#[test]
fn proxy_adapter_builds_from_config() {
    let config = ApiConfig {
        app_base_url: "http://app.internal/v1/".to_string(),
        event_log_mode: EventLogMode::FailFast,
    };

    assert!(ProxyAdapter::new(&config).is_ok());
}

#[test]
fn proxy_adapter_rejects_invalid_base_url() {
    let config = ApiConfig {
        app_base_url: "not a url".to_string(),
        event_log_mode: EventLogMode::FailFast,
    };

    let err = ProxyAdapter::new(&config).unwrap_err();

    assert!(matches!(err, HandlerError::Config(_)));
}
