//! Streaming Chat Lambda - Bedrock `ConverseStream` output as Server-Sent
//! Events over Lambda Response Streaming.

pub mod handler;
pub mod request;
pub mod sse;
