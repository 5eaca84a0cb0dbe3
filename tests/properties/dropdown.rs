//! Property tests for dropdown projection.

use proptest::prelude::*;

use nestset::{build_tree, project_dropdown, DropdownItem, DropdownLabel, Node, NodeId};

use crate::shapes::{arb_shape, nested_set};

fn describe(node: &Node) -> DropdownLabel {
    DropdownLabel {
        label: node.id().to_string(),
        url: String::new(),
        visible: true,
    }
}

fn flatten(items: &[DropdownItem], out: &mut Vec<NodeId>) {
    for item in items {
        out.push(item.id);
        if let Some(children) = &item.items {
            flatten(children, out);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: leaf entries == nodes with right - left == 1.
    #[test]
    fn property_leaf_entries_match_leaf_nodes(picks in arb_shape(40)) {
        let tree = build_tree(nested_set(1, &picks)).unwrap();

        let items = project_dropdown(tree.items(), None, describe);

        let leaves: usize = items.iter().map(DropdownItem::leaf_count).sum();
        prop_assert_eq!(leaves, tree.items().iter().filter(|n| n.is_leaf()).count());
    }

    /// PROPERTY: the top level holds exactly the root's children and
    /// flattening gives back the pre-order sequence.
    #[test]
    fn property_projection_mirrors_tree(picks in arb_shape(40)) {
        let tree = build_tree(nested_set(1, &picks)).unwrap();

        let items = project_dropdown(tree.items(), None, describe);

        let top: Vec<NodeId> = items.iter().map(|i| i.id).collect();
        let children: Vec<NodeId> = tree.children(tree.root_id()).iter().map(|n| n.id()).collect();
        prop_assert_eq!(top, children);

        let mut flat = Vec::new();
        flatten(&items, &mut flat);
        let expected: Vec<NodeId> = tree.items().iter().map(Node::id).collect();
        prop_assert_eq!(flat, expected);
    }

    /// PROPERTY: exactly the active id is flagged active.
    #[test]
    fn property_single_active_flag(
        picks in arb_shape(30),
        pick in any::<proptest::sample::Index>(),
    ) {
        let tree = build_tree(nested_set(1, &picks)).unwrap();
        prop_assume!(!tree.is_empty());
        let active = tree.items()[pick.index(tree.len())].id();

        let items = project_dropdown(tree.items(), Some(active), describe);

        fn count_active(items: &[DropdownItem]) -> usize {
            items
                .iter()
                .map(|i| usize::from(i.active) + i.items.as_deref().map_or(0, count_active))
                .sum()
        }
        prop_assert_eq!(count_active(&items), 1);
    }
}
