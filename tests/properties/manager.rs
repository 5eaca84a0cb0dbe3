//! Property tests for manager query budgets.

use proptest::prelude::*;

use nestset::{InMemoryRowSource, LoadMode, Node, NodeFactory, RawRow, TreeManager};
use serde_json::{json, Value};

use crate::shapes::{arb_shape, nested_set};

fn to_row(node: &Node) -> RawRow {
    let root = if node.is_root() {
        Value::Null
    } else {
        Value::from(node.root_id().get())
    };
    RawRow::new()
        .with("id", node.id().get())
        .with("tree", root)
        .with("lft", node.left())
        .with("rgt", node.right())
        .with("depth", node.depth())
}

fn forest_rows(shapes: &[Vec<proptest::sample::Index>]) -> Vec<RawRow> {
    shapes
        .iter()
        .enumerate()
        .flat_map(|(i, picks)| nested_set(1 + i as u64 * 1000, picks))
        .map(|node| to_row(&node))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: eager search for any id after the first load is free.
    #[test]
    fn property_eager_search_is_free(
        shapes in proptest::collection::vec(arb_shape(15), 1..4),
        pick in any::<proptest::sample::Index>(),
    ) {
        let rows = forest_rows(&shapes);
        let wanted = rows[pick.index(rows.len())].get("id").cloned().unwrap_or(Value::Null);
        let manager = TreeManager::new(
            InMemoryRowSource::new(rows),
            NodeFactory::default(),
            LoadMode::Eager,
        );
        manager.get_roots(false).unwrap();
        manager.source().reset_queries();

        let found = manager.search("id", &wanted).unwrap();

        prop_assert!(found.is_some());
        prop_assert_eq!(manager.source().queries().total(), 0);
    }

    /// PROPERTY: a lazy miss costs at most one query, a hit on a loaded tree none.
    #[test]
    fn property_lazy_search_budget(
        shapes in proptest::collection::vec(arb_shape(15), 1..4),
        pick in any::<proptest::sample::Index>(),
    ) {
        let rows = forest_rows(&shapes);
        let wanted = rows[pick.index(rows.len())].get("id").cloned().unwrap_or(Value::Null);
        let manager = TreeManager::new(
            InMemoryRowSource::new(rows),
            NodeFactory::default(),
            LoadMode::Lazy,
        );

        prop_assert!(manager.search("id", &wanted).unwrap().is_some());
        prop_assert_eq!(manager.source().queries().total(), 1);
        prop_assert!(manager.search("id", &wanted).unwrap().is_some());
        prop_assert_eq!(manager.source().queries().total(), 1);
        prop_assert!(manager.search("id", &json!(999_999)).unwrap().is_none());
        prop_assert_eq!(manager.source().queries().total(), 2);
    }

    /// PROPERTY: get_items returns every stored row of the root.
    #[test]
    fn property_items_match_stored_rows(shapes in proptest::collection::vec(arb_shape(15), 1..4)) {
        let rows = forest_rows(&shapes);
        let manager = TreeManager::new(
            InMemoryRowSource::new(rows),
            NodeFactory::default(),
            LoadMode::Lazy,
        );

        for (i, picks) in shapes.iter().enumerate() {
            let root = nestset::NodeId::new(1 + i as u64 * 1000);
            let tree = manager.get_items(root, false).unwrap();
            prop_assert_eq!(tree.len(), picks.len());
        }
        prop_assert_eq!(manager.source().queries().root, shapes.len());
    }
}
