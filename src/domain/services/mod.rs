//! Domain Services
//!
//! Pure logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod dropdown;
mod search_index;
mod tree_builder;

pub use dropdown::{project_dropdown, DropdownItem, DropdownLabel, DropdownProjector};
pub use search_index::{indent_title, search_entries, SearchEntry};
pub use tree_builder::{build_forest, build_tree, MalformedTreeError, Tree};
