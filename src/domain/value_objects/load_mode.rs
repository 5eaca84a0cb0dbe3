//! Load mode value object - how eagerly a manager fills its cache
//!
//! - `Lazy`: trees load per root on first use; searches may fall back to storage
//! - `Eager`: the whole forest loads once; cache misses are definitive

use serde::{Deserialize, Serialize};

/// Loading policy of a tree manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Load per root on demand
    #[default]
    Lazy,
    /// Load the whole forest on first use ("autoload")
    Eager,
}

impl LoadMode {
    /// Maps the `autoload` config flag to a mode
    pub fn from_autoload(autoload: bool) -> Self {
        if autoload {
            LoadMode::Eager
        } else {
            LoadMode::Lazy
        }
    }

    pub fn is_eager(&self) -> bool {
        matches!(self, LoadMode::Eager)
    }
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadMode::Lazy => write!(f, "lazy"),
            LoadMode::Eager => write!(f, "eager"),
        }
    }
}
