//! Tracing Event Sink
//!
//! Forwards tree events to `tracing`. Loads are logged at debug level,
//! cache hits at trace level, a missing default as a warning.

use tracing::{debug, trace, warn};

use crate::domain::ports::{TreeEvent, TreeEventSink};

/// Event sink that emits structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TreeEventSink for TracingEventSink {
    fn on_event(&self, event: TreeEvent) {
        match event {
            TreeEvent::ForestLoaded { roots, nodes } => {
                debug!(roots, nodes, "loaded forest");
            }
            TreeEvent::TreeLoaded { root, nodes } => {
                debug!(root = root.get(), nodes, "loaded tree");
            }
            TreeEvent::CacheHit { root } => {
                trace!(root = root.get(), "served tree from cache");
            }
            TreeEvent::SearchFallback { property, found } => {
                debug!(%property, found, "search fell back to row source");
            }
            TreeEvent::DefaultResolved { root } => {
                debug!(root = root.get(), "resolved default root");
            }
            TreeEvent::DefaultMissing => {
                warn!("no default item found");
            }
            TreeEvent::Invalidated => {
                debug!("tree cache invalidated");
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        tracing::enabled!(tracing::Level::TRACE)
    }
}
