//! API Lambda - the invocation shim in front of the web application.
//!
//! This module handles:
//! - Per-invocation diagnostics (`event_log` module)
//! - The adapter seam the shim delegates through (`adapter` module)
//! - Event-to-HTTP translation against the application (`proxy` module)
//! - The Lambda entry point itself (`handler` module)

pub mod adapter;
pub mod event_log;
pub mod handler;
pub mod parsing;
pub mod proxy;
