//! Property tests for the tree builder.

use proptest::prelude::*;

use nestset::{build_forest, build_tree, Node, NodeId};

use crate::shapes::{arb_shape, nested_set};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: building keeps pre-order; depth is the parent's depth + 1.
    #[test]
    fn property_build_preserves_pre_order_and_depth(picks in arb_shape(40)) {
        let nodes = nested_set(1, &picks);
        let expected: Vec<NodeId> = nodes.iter().skip(1).map(Node::id).collect();

        let tree = build_tree(nodes).unwrap();

        let ids: Vec<NodeId> = tree.items().iter().map(Node::id).collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(tree.nodes().zip(tree.nodes().skip(1)).all(|(a, b)| a.left() < b.left()));

        for item in tree.items() {
            let parent = tree.parent(item.id()).unwrap();
            prop_assert_eq!(item.depth(), parent.depth() + 1);
            prop_assert!(parent.contains(item));
        }
    }

    /// PROPERTY: children of every node account for its whole interval.
    #[test]
    fn property_children_cover_descendants(picks in arb_shape(40)) {
        let tree = build_tree(nested_set(1, &picks)).unwrap();

        for node in tree.nodes() {
            let below: usize = tree
                .children(node.id())
                .iter()
                .map(|child| child.descendant_count() + 1)
                .sum();
            prop_assert_eq!(below, node.descendant_count());
        }
    }

    /// PROPERTY: a forest splits back into its roots, in order.
    #[test]
    fn property_forest_groups_by_root(first in arb_shape(20), second in arb_shape(20)) {
        let mut nodes = nested_set(1, &first);
        nodes.extend(nested_set(1000, &second));

        let trees = build_forest(nodes).unwrap();

        prop_assert_eq!(trees.len(), 2);
        prop_assert_eq!(trees[0].root_id(), NodeId::new(1));
        prop_assert_eq!(trees[1].root_id(), NodeId::new(1000));
        prop_assert_eq!(trees[1].len(), second.len());
    }

    /// PROPERTY: any reordering of a valid tree is rejected, never accepted.
    #[test]
    fn property_out_of_order_input_is_rejected(
        picks in arb_shape(20),
        a in any::<proptest::sample::Index>(),
        b in any::<proptest::sample::Index>(),
    ) {
        let mut nodes = nested_set(1, &picks);
        let (i, j) = (a.index(nodes.len()), b.index(nodes.len()));
        prop_assume!(i != j);
        nodes.swap(i, j);

        prop_assert!(build_tree(nodes).is_err());
    }

    /// PROPERTY: arbitrary coordinates never panic the builder.
    #[test]
    fn property_arbitrary_rows_never_panic(
        rows in proptest::collection::vec((0u64..4, -5i64..20, -5i64..20, 0u32..4), 0..12)
    ) {
        let nodes: Vec<Node> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (root, left, right, depth))| {
                Node::new(NodeId::new(i as u64), NodeId::new(root), left, right, depth)
            })
            .collect();

        let _ = build_forest(nodes);
    }
}
