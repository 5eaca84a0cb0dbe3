//! Tree manager
//!
//! Generic nested-set manager: it owns a row source, an object factory and a
//! cache snapshot, and answers root/item/default/search lookups with as few
//! storage round-trips as the load mode allows.
//!
//! Concrete managers (menus, config sections) compose a `TreeManager` with
//! their own factory instead of re-implementing the loading rules.

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use serde_json::Value;

use super::default_resolver::{DefaultResolver, DefaultState};
use super::tree_cache::TreeCache;
use crate::domain::entities::{Node, NodeId, RawRow};
use crate::domain::ports::{ObjectFactory, RowSource, TreeEvent, TreeEventSink};
use crate::domain::services::{build_forest, build_tree, Tree};
use crate::domain::value_objects::{values_match, Field, LoadMode};
use crate::error::{NotFound, OptionalExt, TreeError, TreeResult};
use crate::infrastructure::events::TracingEventSink;

pub struct TreeManager<S, F> {
    source: S,
    factory: F,
    mode: LoadMode,
    cache: RwLock<Arc<TreeCache>>,
    default: DefaultResolver,
    events: Arc<dyn TreeEventSink>,
}

impl<S, F> std::fmt::Debug for TreeManager<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.cache.read();
        f.debug_struct("TreeManager")
            .field("mode", &self.mode)
            .field("all_roots_loaded", &cache.all_roots_loaded())
            .field("trees", &cache.tree_count())
            .field("nodes", &cache.node_count())
            .field("default", &self.default.state())
            .finish()
    }
}

impl<S, F> TreeManager<S, F>
where
    S: RowSource,
    F: ObjectFactory,
{
    /// Creates a manager with an empty cache. Nothing is loaded until the
    /// first lookup, whatever the mode.
    pub fn new(source: S, factory: F, mode: LoadMode) -> Self {
        Self {
            source,
            factory,
            mode,
            cache: RwLock::new(Arc::new(TreeCache::new())),
            default: DefaultResolver::new(),
            events: Arc::new(TracingEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn TreeEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Current cache snapshot
    pub fn snapshot(&self) -> Arc<TreeCache> {
        Arc::clone(&self.cache.read())
    }

    pub fn default_state(&self) -> DefaultState {
        self.default.state()
    }

    /// All roots in load order.
    ///
    /// Served from cache unless `reload` is set or no full load has happened
    /// yet; otherwise the whole forest is fetched and the cache replaced.
    pub fn get_roots(&self, reload: bool) -> TreeResult<Arc<Vec<Node>>> {
        if !reload {
            let snapshot = self.snapshot();
            if snapshot.all_roots_loaded() {
                return Ok(snapshot.roots());
            }
        }
        Ok(self.load_forest()?.roots())
    }

    /// The tree of root `id`.
    ///
    /// `id` may also name an item of an already loaded tree. On a miss lazy
    /// mode fetches that one root; eager mode loads the forest once and
    /// treats anything still missing as absent.
    pub fn get_items(&self, id: NodeId, reload: bool) -> TreeResult<Arc<Tree>> {
        let snapshot = self.snapshot();
        if !reload {
            if let Some(tree) = cached_tree(&snapshot, id) {
                if self.events.wants_detailed_events() {
                    self.emit(TreeEvent::CacheHit {
                        root: tree.root_id(),
                    });
                }
                return Ok(tree);
            }
        }

        if self.mode.is_eager() {
            let snapshot = if reload || !snapshot.all_roots_loaded() {
                self.load_forest()?
            } else {
                snapshot
            };
            return cached_tree(&snapshot, id).ok_or_else(|| NotFound::Root(id).into());
        }

        self.load_root(id)
    }

    /// Loads the trees holding rows where `property` equals `value`.
    ///
    /// Returns whether any row matched. Trees already loaded are not
    /// fetched again.
    pub fn load_tree(&self, property: &str, value: &Value) -> TreeResult<bool> {
        let rows = self.fetch_where(property, value)?;
        if rows.is_empty() {
            return Ok(false);
        }

        let roots: IndexSet<NodeId> = self
            .decode(rows)?
            .iter()
            .map(Node::root_id)
            .collect();
        for root in roots {
            if !self.snapshot().items_loaded(root) {
                self.load_root(root)?;
            }
        }
        Ok(true)
    }

    /// First node whose `property` equals `value`.
    ///
    /// Cached nodes are searched first. Lazy mode then asks storage once and
    /// remembers the hit; eager mode treats a cache miss as final.
    pub fn search(&self, property: &str, value: &Value) -> TreeResult<Option<Node>> {
        let snapshot = if self.mode.is_eager() {
            self.ensure_forest()?
        } else {
            self.snapshot()
        };

        let field = self.factory.columns().field_for(property);
        let cached = snapshot.find(|node| {
            node.field(&field)
                .is_some_and(|stored| values_match(&stored, value))
        });
        if let Some(node) = cached {
            return Ok(Some(node.clone()));
        }
        if self.mode.is_eager() {
            return Ok(None);
        }

        let found = match self.fetch_where(property, value)?.into_iter().next() {
            Some(row) => {
                let node = self.factory.from_row(row)?;
                self.update(|cache| cache.with_partial(node.clone()));
                Some(node)
            }
            None => None,
        };
        self.emit(TreeEvent::SearchFallback {
            property: property.to_string(),
            found: found.is_some(),
        });
        Ok(found)
    }

    /// Root holding the default node, if any.
    ///
    /// Resolved pointer first, then cached trees, then (unless the forest is
    /// resident) one targeted load of the default row's tree.
    pub fn default_root(&self) -> TreeResult<Option<NodeId>> {
        if let Some(root) = self.default.resolved() {
            return Ok(Some(root));
        }

        let snapshot = if self.mode.is_eager() {
            self.ensure_forest()?
        } else {
            self.snapshot()
        };
        if let Some(root) = self.resolve_default(&snapshot) {
            return Ok(Some(root));
        }
        if snapshot.all_roots_loaded() {
            self.emit(TreeEvent::DefaultMissing);
            return Ok(None);
        }

        let is_default = Field::IsDefault.to_string();
        if self.load_tree(&is_default, &Value::Bool(true))? {
            if let Some(root) = self.resolve_default(&self.snapshot()) {
                return Ok(Some(root));
            }
        }
        self.emit(TreeEvent::DefaultMissing);
        Ok(None)
    }

    /// Tree of the default root; `None` when no default exists
    pub fn default_items(&self) -> TreeResult<Option<Arc<Tree>>> {
        match self.default_root()? {
            Some(root) => self.get_items(root, false).optional(),
            None => Ok(None),
        }
    }

    /// The node flagged default.
    ///
    /// Fails with `NotFound::NoDefault` when no default exists, and with
    /// `InconsistentDefault` when the resolved root no longer holds it.
    pub fn get_default(&self) -> TreeResult<Node> {
        let root = self.default_root()?.ok_or(NotFound::NoDefault)?;
        let tree = self.get_items(root, false)?;
        tree.default_node()
            .cloned()
            .ok_or(TreeError::InconsistentDefault { root })
    }

    pub fn has_default(&self) -> TreeResult<bool> {
        Ok(self.default_root()?.is_some())
    }

    /// Drops every cached tree and the default pointer.
    pub fn invalidate(&self) {
        *self.cache.write() = Arc::new(TreeCache::new());
        self.default.reset();
        self.emit(TreeEvent::Invalidated);
    }

    fn ensure_forest(&self) -> TreeResult<Arc<TreeCache>> {
        let snapshot = self.snapshot();
        if snapshot.all_roots_loaded() {
            return Ok(snapshot);
        }
        self.load_forest()
    }

    fn load_forest(&self) -> TreeResult<Arc<TreeCache>> {
        let rows = self.source.fetch_all().map_err(TreeError::Source)?;
        let trees = build_forest(self.decode(rows)?)?;
        let next = Arc::new(TreeCache::from_forest(trees));
        *self.cache.write() = Arc::clone(&next);

        self.emit(TreeEvent::ForestLoaded {
            roots: next.tree_count(),
            nodes: next.node_count(),
        });
        if self.default.resolved().is_none() {
            self.resolve_default(&next);
        }
        Ok(next)
    }

    fn load_root(&self, id: NodeId) -> TreeResult<Arc<Tree>> {
        let rows = self.source.fetch_root(id).map_err(TreeError::Source)?;
        if rows.is_empty() {
            return Err(NotFound::Root(id).into());
        }
        let tree = build_tree(self.decode(rows)?)?;
        let root = tree.root_id();
        let nodes = tree.len() + 1;

        let next = self.update(|cache| cache.with_tree(tree));
        self.emit(TreeEvent::TreeLoaded { root, nodes });
        next.tree(root).ok_or_else(|| NotFound::Root(id).into())
    }

    fn fetch_where(&self, property: &str, value: &Value) -> TreeResult<Vec<RawRow>> {
        let field = self.factory.columns().field_for(property);
        let column = self.factory.columns().column_for(&field);
        self.source
            .fetch_where(column, value)
            .map_err(TreeError::Source)
    }

    fn decode(&self, rows: Vec<RawRow>) -> TreeResult<Vec<Node>> {
        let nodes = rows
            .into_iter()
            .map(|row| self.factory.from_row(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(nodes)
    }

    fn resolve_default(&self, cache: &TreeCache) -> Option<NodeId> {
        let was_resolved = self.default.resolved().is_some();
        let root = self.default.scan(cache)?;
        if !was_resolved {
            self.emit(TreeEvent::DefaultResolved { root });
        }
        Some(root)
    }

    /// Publishes a new snapshot derived from the current one
    fn update(&self, change: impl FnOnce(&TreeCache) -> TreeCache) -> Arc<TreeCache> {
        let mut guard = self.cache.write();
        let next = Arc::new(change(&guard));
        *guard = Arc::clone(&next);
        next
    }

    fn emit(&self, event: TreeEvent) {
        self.events.on_event(event);
    }
}

fn cached_tree(cache: &TreeCache, id: NodeId) -> Option<Arc<Tree>> {
    cache.tree(id).or_else(|| cache.tree_containing(id))
}
