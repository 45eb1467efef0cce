//! Per-invocation event diagnostics.
//!
//! Every invocation writes one marker line followed by a pretty-printed
//! rendering of the event to stdout, where Lambda forwards it to `CloudWatch`
//! Logs. Rendering happens before the adapter is invoked.

use serde_json::Value;
use tracing::warn;

use crate::core::config::EventLogMode;
use crate::errors::HandlerError;

/// Marker line preceding the rendered event.
pub const EVENT_MARKER: &str = "EVENT RECEIVED:";

/// Renders the event as the marker line plus an indented (2-space) JSON body.
///
/// # Errors
///
/// Returns `HandlerError::EventLog` if the event cannot be serialized.
pub fn render_event(event: &Value) -> Result<String, HandlerError> {
    let pretty =
        serde_json::to_string_pretty(event).map_err(|e| HandlerError::EventLog(e.to_string()))?;
    Ok(format!("{EVENT_MARKER}\n{pretty}"))
}

/// Writes the diagnostic record for one invocation.
///
/// # Errors
///
/// Under `EventLogMode::FailFast`, a rendering failure is returned to the
/// caller and aborts the invocation. Under `BestEffort` it is logged as a
/// warning and the invocation continues.
pub fn log_event(event: &Value, mode: EventLogMode) -> Result<(), HandlerError> {
    match render_event(event) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => match mode {
            EventLogMode::FailFast => Err(e),
            EventLogMode::BestEffort => {
                warn!("Skipping event diagnostic: {}", e);
                Ok(())
            }
        },
    }
}
