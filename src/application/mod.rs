//! Application Layer
//!
//! Managers that orchestrate loading and lookups.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain tree rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Managers
//!
//! - `TreeManager` - Generic nested-set manager (cache, default, search)
//! - `MenuManager` - Menus, active entry, dropdowns, search listing
//! - `ConfigManager` - Config sections stored as trees

pub mod config_sections;
pub mod default_resolver;
pub mod menu;
pub mod tree_cache;
pub mod tree_manager;

pub use config_sections::{ConfigManager, ConfigRow, ConfigSection};
pub use default_resolver::{DefaultResolver, DefaultState};
pub use menu::{MenuItem, MenuManager};
pub use tree_cache::{TreeCache, TreeSlot};
pub use tree_manager::TreeManager;
