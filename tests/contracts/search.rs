//! Contract tests for search and the menu search listing.

use nestset::QueryCounts;
use serde_json::json;

use crate::common::*;

/// CONTRACT: with autoload, search never touches storage after construction.
#[test]
fn contract_eager_search_costs_zero_queries() {
    let menus = menu_manager(true);
    menus.tree().source().reset_queries();

    let found = menus.search("id", &json!(12)).unwrap().unwrap();
    assert_eq!(found.str_field("title"), Some("Terms"));
    assert!(menus.search("title", &json!("Missing")).unwrap().is_none());

    assert_eq!(menus.tree().source().queries().total(), 0);
}

/// CONTRACT: a lazy cache miss costs exactly one targeted query.
#[test]
fn contract_lazy_miss_costs_one_query() {
    let menus = menu_manager(false);

    let found = menus.search("route", &json!("page/team")).unwrap().unwrap();

    assert_eq!(found.str_field("title"), Some("Team"));
    assert_eq!(
        menus.tree().source().queries(),
        QueryCounts {
            all: 0,
            filtered: 1,
            root: 0
        }
    );

    // remembered hit
    menus.search("route", &json!("page/team")).unwrap();
    assert_eq!(menus.tree().source().queries().total(), 1);
}

/// CONTRACT: absence is never cached in lazy mode.
#[test]
fn contract_lazy_absence_is_rechecked() {
    let menus = menu_manager(false);

    assert!(menus.search("title", &json!("Missing")).unwrap().is_none());
    assert!(menus.search("title", &json!("Missing")).unwrap().is_none());

    assert_eq!(menus.tree().source().queries().filtered, 2);
}

/// CONTRACT: search listing indents by depth and skips menu roots.
#[test]
fn contract_search_entries_listing() {
    let menus = menu_manager(false);

    let entries = menus.search_entries("").unwrap();
    let titles = entries
        .iter()
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(titles, @r"
    Home
    About
    - Team
    - Jobs
    - - Intern
    Contact
    Privacy
    Terms
    ");
    assert!(entries.iter().all(|e| e.section == "Menus"));
}

/// CONTRACT: the listing filters by title substring.
#[test]
fn contract_search_entries_filter() {
    let menus = menu_manager(true);

    let entries = menus.search_entries("Te").unwrap();

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["- Team", "Terms"]);
    assert_eq!(entries[1].route, "page/terms");
}
