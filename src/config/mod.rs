//! Configuration module for nestset
//!
//! Resolution order:
//! 1. Environment variables (NESTSET_*)
//! 2. Project config (<project>/nestset.toml)
//! 3. User config (<config dir>/nestset/config.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, with_overrides_from};
pub use types::{ConfigError, ManagerConfig, ManagerSettings, MenuConfig};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "nestset.toml";
