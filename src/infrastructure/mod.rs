//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `sources/` - Row sources (in-memory table, JSON snapshot)
//! - `factories/` - Object factories (plain nodes, menu items, config entries)
//! - `events/` - Event sinks (tracing, NDJSON)

pub mod events;
pub mod factories;
pub mod sources;

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use factories::{ConfigEntryFactory, MenuItemFactory, NodeFactory};
pub use sources::{InMemoryRowSource, QueryCounts};
