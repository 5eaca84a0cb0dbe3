//! Tree cache snapshot
//!
//! A `TreeCache` is never mutated once published. Every load produces a new
//! snapshot (`with_tree`, `with_partial`, `from_forest`) which the manager
//! swaps in under its lock, so readers holding an older `Arc<TreeCache>`
//! always see one complete, consistent set of trees.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::entities::{Node, NodeId};
use crate::domain::services::Tree;

/// What is known about one root
#[derive(Debug, Clone, PartialEq)]
pub enum TreeSlot {
    /// Root and all of its items are resident
    Loaded(Arc<Tree>),
    /// Individual nodes found by search fallback, sorted by left
    Partial(Vec<Node>),
}

impl TreeSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, TreeSlot::Loaded(_))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        match self {
            TreeSlot::Loaded(tree) => Box::new(tree.nodes()),
            TreeSlot::Partial(nodes) => Box::new(nodes.iter()),
        }
    }
}

/// Immutable snapshot of loaded trees, keyed by root id in load order
#[derive(Debug, Clone, Default)]
pub struct TreeCache {
    roots: Arc<Vec<Node>>,
    all_roots_loaded: bool,
    slots: IndexMap<NodeId, TreeSlot>,
}

impl TreeCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot holding a complete forest
    pub fn from_forest(trees: Vec<Tree>) -> Self {
        let roots: Vec<Node> = trees.iter().map(|tree| tree.root().clone()).collect();
        let slots: IndexMap<NodeId, TreeSlot> = trees
            .into_iter()
            .map(|tree| (tree.root_id(), TreeSlot::Loaded(Arc::new(tree))))
            .collect();
        Self {
            roots: Arc::new(roots),
            all_roots_loaded: true,
            slots,
        }
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once a full forest load has populated the cache
    pub fn all_roots_loaded(&self) -> bool {
        self.all_roots_loaded
    }

    /// Root nodes in load order; complete only if [`Self::all_roots_loaded`]
    pub fn roots(&self) -> Arc<Vec<Node>> {
        Arc::clone(&self.roots)
    }

    /// True if the items of `root` are resident
    pub fn items_loaded(&self, root: NodeId) -> bool {
        self.slots.get(&root).is_some_and(TreeSlot::is_loaded)
    }

    /// Loaded tree of `root`
    pub fn tree(&self, root: NodeId) -> Option<Arc<Tree>> {
        match self.slots.get(&root)? {
            TreeSlot::Loaded(tree) => Some(Arc::clone(tree)),
            TreeSlot::Partial(_) => None,
        }
    }

    /// Loaded tree that holds `id`, as root or item
    pub fn tree_containing(&self, id: NodeId) -> Option<Arc<Tree>> {
        self.loaded_trees()
            .find(|tree| tree.contains(id))
            .map(Arc::clone)
    }

    pub fn loaded_trees(&self) -> impl Iterator<Item = &Arc<Tree>> {
        self.slots.values().filter_map(|slot| match slot {
            TreeSlot::Loaded(tree) => Some(tree),
            TreeSlot::Partial(_) => None,
        })
    }

    /// Every cached node: root order, then pre-order within each root
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.slots.values().flat_map(TreeSlot::nodes)
    }

    /// First cached node matching `predicate`
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.nodes().find(|node| predicate(node))
    }

    /// Root id of the first cached node flagged default
    pub fn default_root(&self) -> Option<NodeId> {
        self.find(Node::is_default).map(Node::root_id)
    }

    pub fn tree_count(&self) -> usize {
        self.loaded_trees().count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// New snapshot with `tree` loaded, replacing any earlier slot for its root.
    ///
    /// A root not seen before is appended to the root list.
    pub fn with_tree(&self, tree: Tree) -> Self {
        let mut next = self.clone();
        let root = tree.root().clone();
        let mut roots = next.roots.as_ref().clone();
        match roots.iter().position(|r| r.id() == root.id()) {
            Some(existing) => roots[existing] = root,
            None => roots.push(root),
        }
        next.roots = Arc::new(roots);
        next.slots
            .insert(tree.root_id(), TreeSlot::Loaded(Arc::new(tree)));
        next
    }

    /// New snapshot remembering a single node whose tree is not loaded
    pub fn with_partial(&self, node: Node) -> Self {
        let mut next = self.clone();
        let slot = next
            .slots
            .entry(node.root_id())
            .or_insert_with(|| TreeSlot::Partial(Vec::new()));
        if let TreeSlot::Partial(nodes) = slot {
            if !nodes.iter().any(|n| n.id() == node.id()) {
                let at = nodes.partition_point(|n| n.left() < node.left());
                nodes.insert(at, node);
            }
        }
        next
    }
}
