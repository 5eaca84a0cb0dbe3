//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod column_map;
mod config_warning;
mod field;
mod load_mode;

pub use column_map::ColumnMap;
pub use config_warning::ConfigWarning;
pub use field::{values_match, Field};
pub use load_mode::LoadMode;
