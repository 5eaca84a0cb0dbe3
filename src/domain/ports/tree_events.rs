//! Tree Event Port
//!
//! Provides an observable interface for cache loads and lookups.
//! Enables logging, query accounting and debugging.

use crate::domain::entities::NodeId;

/// Event emitted by a tree manager
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// Whole forest fetched and rebuilt
    ForestLoaded { roots: usize, nodes: usize },

    /// One tree fetched and rebuilt
    TreeLoaded { root: NodeId, nodes: usize },

    /// Items served from cache
    CacheHit { root: NodeId },

    /// Search missed the cache and queried storage
    SearchFallback { property: String, found: bool },

    /// Default root identified
    DefaultResolved { root: NodeId },

    /// No default node exists in the inspected rows
    DefaultMissing,

    /// Cache dropped on request
    Invalidated,
}

/// Trait for receiving tree events
///
/// Implementations can be:
/// - TracingEventSink: structured log lines
/// - NoopEventSink: Silent operation
pub trait TreeEventSink: Send + Sync {
    /// Handle a tree event
    fn on_event(&self, event: TreeEvent);

    /// Check if this sink wants per-lookup events (cache hits)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&self, _event: TreeEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
