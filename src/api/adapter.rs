//! The adapter seam the invocation shim delegates through.
//!
//! The adapter owns all translation between the platform's event/context
//! shapes and the web application's request/response model; the shim only
//! passes values through it unmodified.

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;

use crate::errors::HandlerError;

/// Bridges one platform invocation to the web application.
///
/// Implementations are constructed once at process initialization and shared
/// read-only across invocations.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Translates the invocation into a call against the application and
    /// returns the platform-shaped response.
    ///
    /// # Errors
    ///
    /// Any failure reaching or executing the application; the shim propagates
    /// it to the runtime uncaught.
    async fn invoke(&self, event: &Value, context: &Context) -> Result<Value, HandlerError>;
}
