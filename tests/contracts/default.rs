//! Contract tests for default resolution.

use nestset::{
    InMemoryRowSource, LoadMode, ManagerConfig, MenuManager, NodeId, NotFound, QueryCounts,
    TreeError,
};

use crate::common::*;

fn footer_default_rows() -> Vec<nestset::RawRow> {
    menu_rows_without_default()
        .into_iter()
        .map(|row| {
            if row.get("id") == Some(&serde_json::json!(12)) {
                row.with("is_default", 1)
            } else {
                row
            }
        })
        .collect()
}

fn manager(rows: Vec<nestset::RawRow>, mode: LoadMode) -> MenuManager<InMemoryRowSource> {
    let config = ManagerConfig::default().with_autoload(mode.is_eager());
    MenuManager::new(InMemoryRowSource::new(rows), &config).unwrap()
}

/// CONTRACT: exactly one default is found whatever root holds it.
#[test]
fn contract_default_found_in_any_root() {
    for mode in [LoadMode::Lazy, LoadMode::Eager] {
        let menus = manager(footer_default_rows(), mode);

        assert_eq!(menus.get_default().unwrap().id(), NodeId::new(12), "{}", mode);
        assert_eq!(menus.default_menu().unwrap().unwrap().id(), NodeId::new(10));
    }
}

/// CONTRACT: lazily, the default costs one lookup plus one tree load.
#[test]
fn contract_lazy_default_query_budget() {
    let menus = manager(footer_default_rows(), LoadMode::Lazy);

    menus.get_default().unwrap();

    assert_eq!(
        menus.tree().source().queries(),
        QueryCounts {
            all: 0,
            filtered: 1,
            root: 1
        }
    );
}

/// CONTRACT: a resolved default costs zero queries afterwards.
#[test]
fn contract_second_default_lookup_is_free() {
    for mode in [LoadMode::Lazy, LoadMode::Eager] {
        let menus = manager(menu_rows(), mode);
        menus.get_default().unwrap();
        menus.tree().source().reset_queries();

        menus.get_default().unwrap();
        menus.items(NodeId::DEFAULT).unwrap();

        assert_eq!(menus.tree().source().queries().total(), 0, "{}", mode);
    }
}

/// CONTRACT: no default is a recoverable NotFound, never a panic.
#[test]
fn contract_missing_default_is_not_found() {
    for mode in [LoadMode::Lazy, LoadMode::Eager] {
        let menus = manager(menu_rows_without_default(), mode);

        let err = menus.get_default().unwrap_err();
        assert!(matches!(err, TreeError::NotFound(NotFound::NoDefault)));
        assert!(menus.default_menu().unwrap().is_none());
        assert!(!menus.tree().has_default().unwrap());
        assert!(menus.active().unwrap_err().is_not_found());
    }
}

/// CONTRACT: the default pointer only moves after invalidation.
#[test]
fn contract_default_pointer_survives_until_invalidate() {
    let menus = manager(menu_rows(), LoadMode::Lazy);
    assert_eq!(menus.get_default().unwrap().id(), NodeId::new(2));

    menus.tree().source().replace_rows(footer_default_rows());
    assert_eq!(menus.get_default().unwrap().id(), NodeId::new(2));

    menus.tree().invalidate();
    assert_eq!(menus.get_default().unwrap().id(), NodeId::new(12));
}
