//! Test fixtures - row snapshots and manager builders.

use nestset::{InMemoryRowSource, ManagerConfig, MenuManager, RawRow};
use serde_json::Value;

/// Two menus.
///
/// main(1): Home (default), About [Team, Jobs [Intern]], Contact
/// footer(10): Privacy, Terms
pub const MENU_SNAPSHOT: &str = r#"[
  {"id": 1, "tree": null, "lft": 1, "rgt": 14, "depth": 0, "title": "Main"},
  {"id": 2, "tree": 1, "lft": 2, "rgt": 3, "depth": 1, "title": "Home", "route": "site/index", "is_default": 1},
  {"id": 3, "tree": 1, "lft": 4, "rgt": 11, "depth": 1, "title": "About", "route": "page/about", "params": "{\"id\": 3}"},
  {"id": 4, "tree": 1, "lft": 5, "rgt": 6, "depth": 2, "title": "Team", "route": "page/team"},
  {"id": 5, "tree": 1, "lft": 7, "rgt": 10, "depth": 2, "title": "Jobs", "route": "page/jobs", "state": 0},
  {"id": 6, "tree": 1, "lft": 8, "rgt": 9, "depth": 3, "title": "Intern", "route": "page/intern"},
  {"id": 7, "tree": 1, "lft": 12, "rgt": 13, "depth": 1, "title": "Contact", "route": "site/contact"},
  {"id": 10, "tree": null, "lft": 1, "rgt": 6, "depth": 0, "title": "Footer"},
  {"id": 11, "tree": 10, "lft": 2, "rgt": 3, "depth": 1, "title": "Privacy", "route": "page/privacy"},
  {"id": 12, "tree": 10, "lft": 4, "rgt": 5, "depth": 1, "title": "Terms", "route": "page/terms"}
]"#;

/// Config sections: system (timezone, pagesize), mail (empty)
pub const CONFIG_SNAPSHOT: &str = r#"[
  {"id": 1, "tree": null, "lft": 1, "rgt": 6, "depth": 0, "name": "system"},
  {"id": 2, "tree": 1, "lft": 2, "rgt": 3, "depth": 1, "name": "timezone", "value": "UTC"},
  {"id": 3, "tree": 1, "lft": 4, "rgt": 5, "depth": 1, "name": "pagesize", "value": 20},
  {"id": 4, "tree": null, "lft": 1, "rgt": 2, "depth": 0, "name": "mail"}
]"#;

/// One nested-set row with the default column names
pub fn row(id: u64, root: Option<u64>, left: i64, right: i64, depth: u32) -> RawRow {
    RawRow::new()
        .with("id", id)
        .with("tree", root.map(Value::from).unwrap_or(Value::Null))
        .with("lft", left)
        .with("rgt", right)
        .with("depth", depth)
}

pub fn menu_rows() -> Vec<RawRow> {
    serde_json::from_str(MENU_SNAPSHOT).expect("menu snapshot is valid JSON")
}

/// Menu rows with the default flag removed
pub fn menu_rows_without_default() -> Vec<RawRow> {
    menu_rows()
        .into_iter()
        .map(|mut row| {
            row.remove("is_default");
            row
        })
        .collect()
}

pub fn menu_source() -> InMemoryRowSource {
    InMemoryRowSource::new(menu_rows())
}

pub fn menu_manager(autoload: bool) -> MenuManager<InMemoryRowSource> {
    let config = ManagerConfig::default().with_autoload(autoload);
    MenuManager::new(menu_source(), &config).expect("menu manager")
}
