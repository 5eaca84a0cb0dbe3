//! Search entries
//!
//! Flattens menu items into entries for a site-wide search listing. Titles
//! are indented with one `"- "` per level below the first.

use serde::Serialize;

use crate::domain::entities::Node;

/// One entry of a site-wide search listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    pub title: String,
    pub route: String,
    pub section: String,
}

/// Builds entries for `nodes` whose title contains `query`.
///
/// An empty query matches everything. Roots are skipped: they name a
/// collection, not a destination.
pub fn search_entries<'a>(
    nodes: impl IntoIterator<Item = &'a Node>,
    query: &str,
    section: &str,
) -> Vec<SearchEntry> {
    nodes
        .into_iter()
        .filter(|node| !node.is_root())
        .filter_map(|node| {
            let title = node.str_field("title").unwrap_or_default();
            if !query.is_empty() && !title.contains(query) {
                return None;
            }
            Some(SearchEntry {
                title: indent_title(title, node.depth()),
                route: node.str_field("route").unwrap_or_default().to_string(),
                section: section.to_string(),
            })
        })
        .collect()
}

/// Prefixes `title` with `"- "` once per level below depth 1
pub fn indent_title(title: &str, depth: u32) -> String {
    let levels = depth.saturating_sub(1) as usize;
    format!("{}{}", "- ".repeat(levels), title)
}
