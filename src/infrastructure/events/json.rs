//! JSON Event Sink
//!
//! Outputs tree events as NDJSON for tooling that tails manager activity.

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::domain::ports::{TreeEvent, TreeEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", event);
        let _ = writer.flush();
    }
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&self, event: TreeEvent) {
        let json = match event {
            TreeEvent::ForestLoaded { roots, nodes } => {
                serde_json::json!({
                    "event": "forest_loaded",
                    "roots": roots,
                    "nodes": nodes,
                })
            }

            TreeEvent::TreeLoaded { root, nodes } => {
                serde_json::json!({
                    "event": "tree_loaded",
                    "root": root,
                    "nodes": nodes,
                })
            }

            TreeEvent::CacheHit { root } => {
                serde_json::json!({
                    "event": "cache_hit",
                    "root": root,
                })
            }

            TreeEvent::SearchFallback { property, found } => {
                serde_json::json!({
                    "event": "search_fallback",
                    "property": property,
                    "found": found,
                })
            }

            TreeEvent::DefaultResolved { root } => {
                serde_json::json!({
                    "event": "default_resolved",
                    "root": root,
                })
            }

            TreeEvent::DefaultMissing => {
                serde_json::json!({ "event": "default_missing" })
            }

            TreeEvent::Invalidated => {
                serde_json::json!({ "event": "invalidated" })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
