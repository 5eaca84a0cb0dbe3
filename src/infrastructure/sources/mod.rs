//! Row Source Implementations
//!
//! Concrete implementations of the `RowSource` port.

mod memory;

pub use memory::{InMemoryRowSource, QueryCounts};
