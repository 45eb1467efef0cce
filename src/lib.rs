//! Serverless edge of the chat application backend.
//!
//! This crate implements a two-Lambda architecture:
//! 1. An API Lambda that logs each incoming invocation event and delegates it,
//!    unmodified, to an adapter that bridges API Gateway events to the web
//!    application behind it.
//! 2. A Streaming Chat Lambda that parses a chat message out of an API Gateway
//!    event, calls Amazon Bedrock `ConverseStream`, and streams model output
//!    back to the client as Server-Sent Events.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Lambda Response Streaming for the chat endpoint
//! - aws-sdk-bedrockruntime for model invocation
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chat_backend::api::handler::ApiHandler;
//! use chat_backend::api::proxy::ProxyAdapter;
//! use chat_backend::core::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     // Set up structured logging
//!     chat_backend::setup_logging();
//!
//!     // The adapter is built once per process and injected into the handler.
//!     let config = ApiConfig::from_env()?;
//!     let adapter = Arc::new(ProxyAdapter::new(&config)?);
//!     let handler = ApiHandler::new(config, adapter);
//!     let handler = &handler;
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
//!         handler.handle(event).await
//!     }))
//!     .await
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod stream;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of each
/// Lambda binary, before the runtime loop.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
