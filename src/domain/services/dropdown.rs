//! Dropdown projection
//!
//! Turns a flat pre-order node sequence into nested dropdown items. One
//! cursor, owned by [`DropdownProjector`], walks the sequence; a non-leaf
//! node descends a level, and a level ends as soon as the next node's depth
//! differs from the node just emitted.
//!
//! The input must be exactly pre-order with correct depths (as produced by
//! the tree builder). Any other order nests items incorrectly.

use serde::Serialize;

use crate::domain::entities::{Node, NodeId};

/// One entry of a dropdown menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownItem {
    pub id: NodeId,
    pub label: String,
    pub url: String,
    pub active: bool,
    pub visible: bool,
    /// Nested entries; absent for leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DropdownItem>>,
}

impl DropdownItem {
    /// Number of leaf entries at or below this item
    pub fn leaf_count(&self) -> usize {
        match &self.items {
            None => 1,
            Some(children) => children.iter().map(DropdownItem::leaf_count).sum(),
        }
    }
}

/// Display data of a node, supplied by the manager that owns the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLabel {
    pub label: String,
    pub url: String,
    pub visible: bool,
}

/// Cursor-driven projector over one pre-order sequence
pub struct DropdownProjector<'a, F> {
    nodes: &'a [Node],
    cursor: usize,
    active: Option<NodeId>,
    describe: F,
}

impl<'a, F> DropdownProjector<'a, F>
where
    F: Fn(&Node) -> DropdownLabel,
{
    pub fn new(nodes: &'a [Node], active: Option<NodeId>, describe: F) -> Self {
        Self {
            nodes,
            cursor: 0,
            active,
            describe,
        }
    }

    /// Consumes the whole sequence
    pub fn project(mut self) -> Vec<DropdownItem> {
        let mut items = Vec::new();
        while self.cursor < self.nodes.len() {
            items.extend(self.level());
        }
        items
    }

    fn level(&mut self) -> Vec<DropdownItem> {
        let nodes = self.nodes;
        let mut items = Vec::new();

        while let Some(node) = nodes.get(self.cursor) {
            self.cursor += 1;

            let DropdownLabel {
                label,
                url,
                visible,
            } = (self.describe)(node);
            let mut item = DropdownItem {
                id: node.id(),
                label,
                url,
                active: self.active == Some(node.id()),
                visible,
                items: None,
            };
            if !node.is_leaf() {
                item.items = Some(self.level());
            }
            items.push(item);

            if nodes
                .get(self.cursor)
                .is_some_and(|next| next.depth() != node.depth())
            {
                return items;
            }
        }

        items
    }
}

/// Projects `nodes` into dropdown items.
pub fn project_dropdown<F>(nodes: &[Node], active: Option<NodeId>, describe: F) -> Vec<DropdownItem>
where
    F: Fn(&Node) -> DropdownLabel,
{
    DropdownProjector::new(nodes, active, describe).project()
}
