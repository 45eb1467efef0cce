//! API Lambda handler - a thin shim over the application adapter.
//!
//! The handler does exactly three things, in order:
//! 1. Writes the diagnostic record of the incoming event.
//! 2. Invokes the injected adapter with the event and context, unmodified.
//! 3. Returns the adapter's result verbatim.
//!
//! It adds no retries, no fallback responses, and no error context: adapter
//! and application failures propagate to the runtime uncaught.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::adapter::Adapter;
use super::event_log;
use crate::core::config::ApiConfig;

/// Lambda entry point holding the process-wide adapter handle.
///
/// Constructed once at process initialization; shared read-only across
/// invocations.
pub struct ApiHandler {
    config: ApiConfig,
    adapter: Arc<dyn Adapter>,
}

impl ApiHandler {
    #[must_use]
    pub fn new(config: ApiConfig, adapter: Arc<dyn Adapter>) -> Self {
        Self { config, adapter }
    }

    /// Handles one invocation.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error unchanged, or an event-rendering error
    /// before the adapter is called when the diagnostic policy is fail-fast.
    #[tracing::instrument(
        level = "info",
        skip(self, event),
        fields(request_id = %event.context.request_id)
    )]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        let (payload, context) = event.into_parts();

        event_log::log_event(&payload, self.config.event_log_mode)?;

        let response = self.adapter.invoke(&payload, &context).await?;
        info!("Invocation forwarded to application");

        Ok(response)
    }
}
