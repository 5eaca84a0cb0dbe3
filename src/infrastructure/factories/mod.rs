//! Object Factory Implementations
//!
//! One factory per manager type. Each reads the structural columns with
//! `decode_structure` and then shapes the payload its manager expects.

mod config;
mod menu;
mod node;

pub use config::{ConfigEntryFactory, NAME_FIELD, VALUE_FIELD};
pub use menu::{MenuItemFactory, DEFAULT_PARAMS_FIELD};
pub use node::NodeFactory;
