//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::loader;
use crate::config::ConfigWarning;
use crate::domain::value_objects::{ColumnMap, LoadMode};
use crate::infrastructure::factories::DEFAULT_PARAMS_FIELD;

/// Config file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// `[manager]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerSettings {
    /// Load every tree on construction and never fall back to storage
    pub autoload: bool,
}

impl ManagerSettings {
    pub fn load_mode(&self) -> LoadMode {
        LoadMode::from_autoload(self.autoload)
    }
}

/// `[menu]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Column holding JSON-encoded route parameters
    pub params_field: String,
    /// Section label of menu search entries
    pub search_section: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            params_field: DEFAULT_PARAMS_FIELD.to_string(),
            search_section: "Menus".to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    pub manager: ManagerSettings,
    pub columns: ColumnMap,
    pub menu: MenuConfig,
}

impl ManagerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Project config, then user config, then defaults; env overrides on top
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    pub fn load_mode(&self) -> LoadMode {
        self.manager.load_mode()
    }

    /// Builder-style toggle, mostly for tests and embedding
    pub fn with_autoload(mut self, autoload: bool) -> Self {
        self.manager.autoload = autoload;
        self
    }
}
