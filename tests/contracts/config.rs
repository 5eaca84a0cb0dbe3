//! Contract tests for configuration and file-backed sources.

use std::fs;

use nestset::{ConfigManager, InMemoryRowSource, ManagerConfig, MenuManager, NodeId};
use serde_json::json;
use tempfile::tempdir;

use crate::common::*;

/// CONTRACT: a TOML config plus a JSON snapshot wire a working menu manager.
#[test]
fn contract_config_and_snapshot_files() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("nestset.toml");
    let rows_path = dir.path().join("menus.json");
    fs::write(&config_path, "[manager]\nautoload = true\n").unwrap();
    fs::write(&rows_path, MENU_SNAPSHOT).unwrap();

    let config = ManagerConfig::load(&config_path).unwrap();
    let source = InMemoryRowSource::from_json_file(&rows_path).unwrap();
    let menus = MenuManager::new(source, &config).unwrap();

    assert_eq!(menus.tree().source().queries().all, 1);
    assert_eq!(menus.get_default().unwrap().id(), NodeId::new(2));
    assert_eq!(menus.tree().source().queries().total(), 1);
}

/// CONTRACT: custom column names flow from config to source and factory.
#[test]
fn contract_custom_columns() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("nestset.toml");
    fs::write(
        &config_path,
        "[columns]\nroot = \"menu_id\"\nleft = \"lhs\"\nright = \"rhs\"\n",
    )
    .unwrap();
    let config = ManagerConfig::load(&config_path).unwrap();

    let rows = menu_rows()
        .into_iter()
        .map(|mut row| {
            for (from, to) in [("tree", "menu_id"), ("lft", "lhs"), ("rgt", "rhs")] {
                if let Some(value) = row.remove(from) {
                    row.insert(to, value);
                }
            }
            row
        })
        .collect();
    let source = InMemoryRowSource::new(rows).with_columns(config.columns.clone());
    let menus = MenuManager::new(source, &config).unwrap();

    let items = menus.items(NodeId::new(10)).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(menus.search("left", &json!(5)).unwrap().unwrap().id(), NodeId::new(4));
}

/// CONTRACT: unknown keys warn instead of failing.
#[test]
fn contract_unknown_config_keys_warn() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nestset.toml");
    fs::write(&path, "[menu]\nparams_feild = \"query\"\n").unwrap();

    let (config, warnings) = ManagerConfig::load_with_warnings(&path).unwrap();

    assert_eq!(config.menu.params_field, "params");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("params_field"));
}

/// CONTRACT: config sections expose entries with fallbacks.
#[test]
fn contract_config_sections() {
    let source = InMemoryRowSource::from_json_str(CONFIG_SNAPSHOT).unwrap();
    let config = ConfigManager::new(source, &ManagerConfig::default()).unwrap();

    let system = config.section("system").unwrap();
    assert_eq!(system.get("pagesize", &json!(10)), &json!(20));
    assert_eq!(system.get("theme", &json!("dark")), &json!("dark"));
    assert_eq!(system.rows().len(), 2);
    assert!(config.section("mail").unwrap().is_empty());
    assert!(config.section("cache").unwrap_err().is_not_found());
}
