//! HTTP forwarding adapter.
//!
//! Translates API Gateway proxy events (both the v1 `httpMethod`/`path` and
//! v2 `rawPath`/`requestContext.http.method` shapes) into HTTP requests
//! against the web application, and maps the application's response back to
//! the `{statusCode, headers, body, isBase64Encoded}` reply shape.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lambda_runtime::Context;
use serde_json::{Value, json};
use url::Url;

use super::adapter::Adapter;
use super::parsing::v_str;
use crate::core::config::ApiConfig;
use crate::errors::HandlerError;

/// Adapter that forwards invocations to the application over HTTP.
#[derive(Debug)]
pub struct ProxyAdapter {
    base_url: Url,
    http: reqwest::Client,
}

impl ProxyAdapter {
    /// # Errors
    ///
    /// Returns `HandlerError::Config` if `APP_BASE_URL` is not a valid URL.
    pub fn new(config: &ApiConfig) -> Result<Self, HandlerError> {
        let base_url = Url::parse(&config.app_base_url)?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl Adapter for ProxyAdapter {
    async fn invoke(&self, event: &Value, _context: &Context) -> Result<Value, HandlerError> {
        let parts = RequestParts::from_event(event)?;

        let mut url = target_url(&self.base_url, &parts.path);
        if let Some(query) = &parts.query {
            url.set_query(Some(query));
        }

        let method = reqwest::Method::from_bytes(parts.method.as_bytes())
            .map_err(|e| HandlerError::Adapter(format!("invalid request method: {e}")))?;

        let mut request = self.http.request(method, url);
        for (name, value) in &parts.headers {
            // The target host comes from the base URL, not the original event.
            if name.eq_ignore_ascii_case("host") {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = parts.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|text| (name.to_string(), text.to_string()))
            })
            .collect();
        let bytes = response.bytes().await?;

        Ok(proxy_response(status, &headers, &bytes))
    }
}

/// Resolves the event path against the base URL, keeping any path prefix the
/// base URL carries (`http://host/v1/` + `/api/chat` -> `http://host/v1/api/chat`).
#[must_use]
pub fn target_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url
}

/// The pieces of an HTTP request extracted from a proxy event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestParts {
    /// # Errors
    ///
    /// Returns `HandlerError::Adapter` if the event carries no HTTP method or
    /// a body flagged base64 that does not decode.
    pub fn from_event(event: &Value) -> Result<Self, HandlerError> {
        let method = v_str(event, &["requestContext", "http", "method"])
            .or_else(|| v_str(event, &["httpMethod"]))
            .ok_or_else(|| {
                HandlerError::Adapter("event is not an HTTP request: missing method".to_string())
            })?
            .to_string();

        let path = v_str(event, &["rawPath"])
            .or_else(|| v_str(event, &["path"]))
            .unwrap_or("/")
            .to_string();

        let query = v_str(event, &["rawQueryString"])
            .filter(|q| !q.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                event
                    .get("queryStringParameters")
                    .and_then(Value::as_object)
                    .filter(|params| !params.is_empty())
                    .map(|params| {
                        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
                        for (key, value) in params {
                            if let Some(text) = value.as_str() {
                                serializer.append_pair(key, text);
                            }
                        }
                        serializer.finish()
                    })
            });

        let headers = event
            .get("headers")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        let is_base64 = event
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let body = match event.get("body").and_then(Value::as_str) {
            Some(raw) if is_base64 => Some(
                BASE64
                    .decode(raw)
                    .map_err(|e| HandlerError::Adapter(format!("invalid base64 body: {e}")))?,
            ),
            Some(raw) => Some(raw.as_bytes().to_vec()),
            None => None,
        };

        Ok(Self {
            method,
            path,
            query,
            headers,
            body,
        })
    }
}

/// Builds the platform reply shape from the application's HTTP response.
///
/// Text bodies pass through as-is; non-UTF-8 bodies are base64-encoded with
/// `isBase64Encoded` set. Repeated headers (`Set-Cookie` and friends) are
/// comma-joined in `headers` and kept intact as `multiValueHeaders`.
#[must_use]
pub fn proxy_response(status: u16, headers: &[(String, String)], body: &[u8]) -> Value {
    let mut single = serde_json::Map::new();
    let mut multi = serde_json::Map::new();
    for (name, value) in headers {
        match single.get_mut(name.as_str()) {
            Some(Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            _ => {
                single.insert(name.clone(), Value::String(value.clone()));
            }
        }
        match multi.get_mut(name.as_str()) {
            Some(Value::Array(values)) => values.push(Value::String(value.clone())),
            _ => {
                multi.insert(name.clone(), json!([value]));
            }
        }
    }

    let (body, is_base64) = match std::str::from_utf8(body) {
        Ok(text) => (text.to_string(), false),
        Err(_) => (BASE64.encode(body), true),
    };

    json!({
        "statusCode": status,
        "headers": single,
        "multiValueHeaders": multi,
        "body": body,
        "isBase64Encoded": is_base64,
    })
}
