//! Random tree shapes encoded as nested-set nodes.

use nestset::{Node, NodeId};
use proptest::prelude::*;
use proptest::sample::Index;

/// Parent picks: node `i + 1` hangs below node `picks[i].index(i + 1)`.
pub fn arb_shape(max_items: usize) -> impl Strategy<Value = Vec<Index>> {
    proptest::collection::vec(any::<Index>(), 0..=max_items)
}

/// Nested-set nodes for `picks`, sorted by left; ids are `root + position`.
pub fn nested_set(root: u64, picks: &[Index]) -> Vec<Node> {
    let count = picks.len() + 1;
    let mut children = vec![Vec::new(); count];
    for (i, pick) in picks.iter().enumerate() {
        let child = i + 1;
        children[pick.index(child)].push(child);
    }

    let mut nodes = Vec::with_capacity(count);
    let mut counter = 0;
    assign(root, 0, 0, &children, &mut counter, &mut nodes);
    nodes.sort_by_key(Node::left);
    nodes
}

fn assign(
    root: u64,
    position: usize,
    depth: u32,
    children: &[Vec<usize>],
    counter: &mut i64,
    out: &mut Vec<Node>,
) {
    *counter += 1;
    let left = *counter;
    for &child in &children[position] {
        assign(root, child, depth + 1, children, counter, out);
    }
    *counter += 1;
    out.push(Node::new(
        NodeId::new(root + position as u64),
        NodeId::new(root),
        left,
        *counter,
        depth,
    ));
}
