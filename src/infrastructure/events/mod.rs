//! Event Sink Implementations
//!
//! Provides concrete implementations of TreeEventSink:
//! - TracingEventSink: structured `tracing` events (default)
//! - JsonEventSink: NDJSON output for tooling

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::TracingEventSink;
