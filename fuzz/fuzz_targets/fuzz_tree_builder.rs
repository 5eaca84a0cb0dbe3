#![no_main]

use libfuzzer_sys::fuzz_target;
use nestset::{build_forest, Node, NodeId};

fuzz_target!(|data: &[u8]| {
    // Each 4-byte chunk is one node: root, left, right, depth
    let nodes: Vec<Node> = data
        .chunks_exact(4)
        .enumerate()
        .map(|(i, chunk)| {
            Node::new(
                NodeId::new(i as u64),
                NodeId::new(u64::from(chunk[0] % 4)),
                i64::from(chunk[1]),
                i64::from(chunk[2]),
                u32::from(chunk[3] % 8),
            )
        })
        .collect();

    // Malformed input must surface as an error, never a panic
    if let Ok(trees) = build_forest(nodes) {
        for tree in &trees {
            assert!(tree
                .nodes()
                .zip(tree.nodes().skip(1))
                .all(|(a, b)| a.left() < b.left()));
        }
    }
});
