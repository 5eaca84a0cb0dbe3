//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod object_factory;
pub mod row_source;
pub mod tree_events;

pub use object_factory::{decode_structure, DecodeError, ObjectFactory};
pub use row_source::RowSource;
pub use tree_events::{NoopEventSink, TreeEvent, TreeEventSink};
