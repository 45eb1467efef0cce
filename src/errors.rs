use aws_sdk_bedrockruntime::error::SdkError;
use thiserror::Error;

/// Failures surfaced by the Lambda handlers.
///
/// The shim keeps "the diagnostic write failed" and "the application call
/// failed" as distinct variants so the runtime glue can tell them apart;
/// neither is retried or masked at this layer.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to render invocation event: {0}")]
    EventLog(String),

    #[error("Failed to forward request to the application: {0}")]
    Adapter(String),

    #[error("Failed to interact with AWS services: {0}")]
    Aws(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::Adapter(error.to_string())
    }
}

impl From<url::ParseError> for HandlerError {
    fn from(error: url::ParseError) -> Self {
        HandlerError::Config(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for HandlerError
where
    E: std::fmt::Debug,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        HandlerError::Aws(format!("{error:?}"))
    }
}
