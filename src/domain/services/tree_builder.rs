//! Tree builder
//!
//! Rebuilds trees from nested-set rows that are already sorted by their
//! left coordinate. A single pass keeps a stack of open intervals (ancestors
//! whose right edge has not been passed yet); the top of that stack is the
//! parent of the next node. Depth is taken from the row and checked against
//! the stack rather than recomputed.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::entities::{Node, NodeId, ROOT_DEPTH};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum MalformedTreeError {
    #[error("cannot build a tree from zero rows")]
    Empty,

    #[error("node {id} has left {left} >= right {right}")]
    InvalidInterval { id: NodeId, left: i64, right: i64 },

    #[error("node {id} has left {left} after left {previous}; rows must be sorted by left")]
    OutOfOrder { id: NodeId, left: i64, previous: i64 },

    #[error("node {id} partially overlaps ancestor {ancestor}")]
    Overlap { id: NodeId, ancestor: NodeId },

    #[error("node {id} has depth {found}, expected {expected}")]
    DepthMismatch {
        id: NodeId,
        expected: u32,
        found: u32,
    },

    #[error("first node {id} is not a root")]
    NotARoot { id: NodeId },

    #[error("node {id} belongs to root {found}, not {expected}")]
    ForeignNode {
        id: NodeId,
        expected: NodeId,
        found: NodeId,
    },

    #[error("node {id} lies outside the interval of root {root}")]
    DetachedNode { id: NodeId, root: NodeId },

    #[error("node {id} appears twice in root {root}")]
    DuplicateId { id: NodeId, root: NodeId },
}

/// One rebuilt tree: its root and the root's descendants in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Node,
    items: Vec<Node>,
    /// Parent of `items[i]` as an index into `items`; `None` means the root
    parents: Vec<Option<usize>>,
    positions: HashMap<NodeId, usize>,
}

impl Tree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_id(&self) -> NodeId {
        self.root.id()
    }

    /// Descendants of the root in pre-order (root excluded)
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Root followed by the items
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.root).chain(self.items.iter())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.root.id() == id || self.positions.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if self.root.id() == id {
            return Some(&self.root);
        }
        self.positions.get(&id).map(|&i| &self.items[i])
    }

    /// Parent of `id`; `None` for the root and for unknown ids
    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        let index = *self.positions.get(&id)?;
        match self.parents[index] {
            Some(parent) => Some(&self.items[parent]),
            None => Some(&self.root),
        }
    }

    /// Direct children of `id` in pre-order
    pub fn children(&self, id: NodeId) -> Vec<&Node> {
        let wanted = if self.root.id() == id {
            None
        } else {
            match self.positions.get(&id) {
                Some(&index) => Some(index),
                None => return Vec::new(),
            }
        };
        self.items
            .iter()
            .zip(&self.parents)
            .filter(|(_, parent)| **parent == wanted)
            .map(|(node, _)| node)
            .collect()
    }

    /// The first node (root included) flagged default
    pub fn default_node(&self) -> Option<&Node> {
        self.nodes().find(|node| node.is_default())
    }
}

struct OpenInterval {
    index: Option<usize>,
    id: NodeId,
    right: i64,
    depth: u32,
}

/// Builds one tree from the nodes of a single root, sorted by left.
pub fn build_tree(nodes: Vec<Node>) -> Result<Tree, MalformedTreeError> {
    let mut nodes = nodes.into_iter();
    let root = nodes.next().ok_or(MalformedTreeError::Empty)?;
    check_interval(&root)?;
    if !root.is_root() {
        return Err(MalformedTreeError::NotARoot { id: root.id() });
    }
    if root.depth() != ROOT_DEPTH {
        return Err(MalformedTreeError::DepthMismatch {
            id: root.id(),
            expected: ROOT_DEPTH,
            found: root.depth(),
        });
    }

    let root_id = root.id();
    let mut items: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut parents = Vec::with_capacity(nodes.len());
    let mut positions = HashMap::with_capacity(nodes.len());
    let mut open = vec![OpenInterval {
        index: None,
        id: root_id,
        right: root.right(),
        depth: root.depth(),
    }];
    let mut previous_left = root.left();

    for node in nodes {
        check_interval(&node)?;
        if node.root_id() != root_id {
            return Err(MalformedTreeError::ForeignNode {
                id: node.id(),
                expected: root_id,
                found: node.root_id(),
            });
        }
        if node.left() <= previous_left {
            return Err(MalformedTreeError::OutOfOrder {
                id: node.id(),
                left: node.left(),
                previous: previous_left,
            });
        }
        previous_left = node.left();

        while open.last().is_some_and(|top| top.right < node.left()) {
            open.pop();
        }
        let parent = open.last().ok_or(MalformedTreeError::DetachedNode {
            id: node.id(),
            root: root_id,
        })?;
        if node.right() >= parent.right {
            return Err(MalformedTreeError::Overlap {
                id: node.id(),
                ancestor: parent.id,
            });
        }
        if node.depth() != parent.depth + 1 {
            return Err(MalformedTreeError::DepthMismatch {
                id: node.id(),
                expected: parent.depth + 1,
                found: node.depth(),
            });
        }

        let index = items.len();
        if node.id() == root_id || positions.insert(node.id(), index).is_some() {
            return Err(MalformedTreeError::DuplicateId {
                id: node.id(),
                root: root_id,
            });
        }
        parents.push(parent.index);
        open.push(OpenInterval {
            index: Some(index),
            id: node.id(),
            right: node.right(),
            depth: node.depth(),
        });
        items.push(node);
    }

    Ok(Tree {
        root,
        items,
        parents,
        positions,
    })
}

/// Groups nodes by root (in order of first appearance) and builds each tree.
pub fn build_forest(nodes: Vec<Node>) -> Result<Vec<Tree>, MalformedTreeError> {
    let mut groups: IndexMap<NodeId, Vec<Node>> = IndexMap::new();
    for node in nodes {
        groups.entry(node.root_id()).or_default().push(node);
    }
    groups.into_values().map(build_tree).collect()
}

fn check_interval(node: &Node) -> Result<(), MalformedTreeError> {
    if node.left() >= node.right() {
        return Err(MalformedTreeError::InvalidInterval {
            id: node.id(),
            left: node.left(),
            right: node.right(),
        });
    }
    Ok(())
}
