use std::env;
use std::str::FromStr;

/// Policy for the per-invocation diagnostic write in the API Lambda.
///
/// `FailFast` aborts the invocation before the adapter is called when the
/// event cannot be rendered; `BestEffort` logs a warning and continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventLogMode {
    #[default]
    FailFast,
    BestEffort,
}

impl FromStr for EventLogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail-fast" => Ok(EventLogMode::FailFast),
            "best-effort" => Ok(EventLogMode::BestEffort),
            other => Err(format!(
                "expected \"fail-fast\" or \"best-effort\", got {other:?}"
            )),
        }
    }
}

/// Configuration for the API Lambda.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub app_base_url: String,
    pub event_log_mode: EventLogMode,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            app_base_url: env::var("APP_BASE_URL").map_err(|e| format!("APP_BASE_URL: {}", e))?,
            event_log_mode: match env::var("EVENT_LOG_MODE") {
                Ok(raw) => raw.parse().map_err(|e| format!("EVENT_LOG_MODE: {}", e))?,
                Err(_) => EventLogMode::default(),
            },
        })
    }
}

/// Configuration for the Streaming Chat Lambda.
///
/// Every field has a default, so construction never fails: the region falls
/// back through the Lambda-provided env vars before the hardcoded default.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub region: String,
    pub model_id: String,
}

pub const DEFAULT_REGION: &str = "eu-central-1";
pub const DEFAULT_MODEL_ID: &str = "amazon.nova-lite-v1:0";

impl StreamConfig {
    pub fn from_env() -> Self {
        Self {
            region: env::var("BEDROCK_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .or_else(|_| env::var("AWS_DEFAULT_REGION"))
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            model_id: env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
        }
    }
}
