//! Nestset - nested-set tree manager
//!
//! Nestset loads hierarchical collections (menus, config sections) stored as
//! flattened nested-set rows, rebuilds them into cached trees per root, and
//! answers default/search/dropdown lookups with as few storage round-trips
//! as the configured load mode allows.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    ConfigManager, ConfigRow, ConfigSection, DefaultState, MenuItem, MenuManager, TreeCache,
    TreeManager,
};
pub use config::{ConfigError, ConfigWarning, ManagerConfig};
pub use domain::entities::{Node, NodeId, RawRow, ROOT_DEPTH};
pub use domain::ports::{
    DecodeError, NoopEventSink, ObjectFactory, RowSource, TreeEvent, TreeEventSink,
};
pub use domain::services::{
    build_forest, build_tree, project_dropdown, DropdownItem, DropdownLabel, MalformedTreeError,
    SearchEntry, Tree,
};
pub use domain::value_objects::{ColumnMap, Field, LoadMode};
pub use error::{NotFound, TreeError, TreeResult};
pub use infrastructure::{
    ConfigEntryFactory, InMemoryRowSource, JsonEventSink, MenuItemFactory, NodeFactory,
    QueryCounts, TracingEventSink,
};
