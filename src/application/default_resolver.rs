//! Default resolver
//!
//! Remembers which root holds the node flagged default. Once resolved, the
//! root id is served without touching storage for the rest of the manager's
//! life (or until `reset`). A failed lookup is not remembered: a later load
//! may still turn the default up.

use parking_lot::RwLock;

use super::tree_cache::TreeCache;
use crate::domain::entities::NodeId;

/// Resolution state of the default pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultState {
    #[default]
    Unresolved,
    Resolved(NodeId),
}

impl DefaultState {
    pub fn root(&self) -> Option<NodeId> {
        match self {
            DefaultState::Unresolved => None,
            DefaultState::Resolved(root) => Some(*root),
        }
    }
}

#[derive(Debug, Default)]
pub struct DefaultResolver {
    state: RwLock<DefaultState>,
}

impl DefaultResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DefaultState {
        *self.state.read()
    }

    /// Cached root id, if resolved
    pub fn resolved(&self) -> Option<NodeId> {
        self.state().root()
    }

    /// Scans `cache` in load order; a hit moves the state to `Resolved`.
    ///
    /// An already resolved pointer wins over the scan.
    pub fn scan(&self, cache: &TreeCache) -> Option<NodeId> {
        let mut state = self.state.write();
        if let DefaultState::Resolved(root) = *state {
            return Some(root);
        }
        let root = cache.default_root()?;
        *state = DefaultState::Resolved(root);
        Some(root)
    }

    pub fn reset(&self) {
        *self.state.write() = DefaultState::Unresolved;
    }
}
