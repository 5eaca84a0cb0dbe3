//! Domain Entities
//!
//! - `RawRow` - A flattened row as the storage layer returns it
//! - `Node` - A typed tree element decoded from a row

mod node;
mod row;

pub use node::{Node, NodeId, ROOT_DEPTH};
pub use row::RawRow;
