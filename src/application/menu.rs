//! Menu manager
//!
//! Each root is a menu, each item a menu entry with a `title`, a `route`
//! and optional route `params`. Exactly one entry across all menus may be
//! flagged default; the menu holding it is the default menu.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::tree_manager::TreeManager;
use crate::config::ManagerConfig;
use crate::domain::entities::{Node, NodeId};
use crate::domain::ports::{RowSource, TreeEventSink};
use crate::domain::services::{
    project_dropdown, search_entries, DropdownItem, DropdownLabel, SearchEntry, Tree,
};
use crate::domain::value_objects::values_match;
use crate::error::{NotFound, OptionalExt, TreeResult};
use crate::infrastructure::events::TracingEventSink;
use crate::infrastructure::factories::{MenuItemFactory, DEFAULT_PARAMS_FIELD};

/// Typed view of a menu node's payload
#[derive(Debug, Clone, Copy)]
pub struct MenuItem<'a> {
    node: &'a Node,
    params_field: &'a str,
}

impl<'a> MenuItem<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            params_field: DEFAULT_PARAMS_FIELD,
        }
    }

    pub fn with_params_field(mut self, params_field: &'a str) -> Self {
        self.params_field = params_field;
        self
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn title(&self) -> &'a str {
        self.node.str_field("title").unwrap_or_default()
    }

    pub fn route(&self) -> &'a str {
        self.node.str_field("route").unwrap_or_default()
    }

    /// Decoded route parameters
    pub fn params(&self) -> Option<&'a Map<String, Value>> {
        self.node.payload().get(self.params_field)?.as_object()
    }

    /// Entries without a `state` are enabled; otherwise `state` must be 1
    pub fn is_enabled(&self) -> bool {
        match self.node.payload().get("state") {
            None | Some(Value::Null) => true,
            Some(state) => values_match(state, &Value::from(1)),
        }
    }

    /// Route followed by the parameters as a query string, keys sorted
    pub fn url(&self) -> String {
        let route = self.route();
        let Some(params) = self.params().filter(|p| !p.is_empty()) else {
            return route.to_string();
        };

        let mut pairs: Vec<(&String, &Value)> = params.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        let query = pairs
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}={}", key, s),
                other => format!("{}={}", key, other),
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", route, query)
    }

    pub fn dropdown_label(&self) -> DropdownLabel {
        DropdownLabel {
            label: self.title().to_string(),
            url: self.url(),
            visible: self.is_enabled(),
        }
    }
}

pub struct MenuManager<S> {
    tree: TreeManager<S, MenuItemFactory>,
    active: RwLock<Option<Node>>,
    search_section: String,
}

impl<S: RowSource> MenuManager<S> {
    /// Creates the manager; with `autoload` every menu is loaded right away.
    pub fn new(source: S, config: &ManagerConfig) -> TreeResult<Self> {
        Self::with_events(source, config, Arc::new(TracingEventSink))
    }

    /// Like [`MenuManager::new`], reporting to `events` from the first load on
    pub fn with_events(
        source: S,
        config: &ManagerConfig,
        events: Arc<dyn TreeEventSink>,
    ) -> TreeResult<Self> {
        let factory = MenuItemFactory::new(config.columns.clone(), config.menu.params_field.clone());
        let manager = Self {
            tree: TreeManager::new(source, factory, config.load_mode()).with_events(events),
            active: RwLock::new(None),
            search_section: config.menu.search_section.clone(),
        };
        manager.autoload()?;
        Ok(manager)
    }

    fn autoload(&self) -> TreeResult<()> {
        if self.tree.mode().is_eager() {
            self.tree.get_roots(false)?;
        }
        Ok(())
    }

    /// The underlying generic manager
    pub fn tree(&self) -> &TreeManager<S, MenuItemFactory> {
        &self.tree
    }

    /// Typed view of `node` using this manager's params column
    pub fn view<'a>(&'a self, node: &'a Node) -> MenuItem<'a> {
        MenuItem::new(node).with_params_field(self.tree.factory().params_field())
    }

    /// All menus (roots).
    ///
    /// `reload` always refetches, even with autoload and a known default.
    pub fn menus(&self, reload: bool) -> TreeResult<Arc<Vec<Node>>> {
        self.tree.get_roots(reload)
    }

    /// Entries of menu `id`; [`NodeId::DEFAULT`] selects the default menu.
    ///
    /// `id` may also be any entry of an already loaded menu.
    pub fn items(&self, id: NodeId) -> TreeResult<Arc<Tree>> {
        if id.is_default_placeholder() {
            return self
                .tree
                .default_items()?
                .ok_or_else(|| NotFound::NoDefault.into());
        }
        self.tree.get_items(id, false)
    }

    /// The default entry; `NotFound::NoDefault` when none is flagged
    pub fn get_default(&self) -> TreeResult<Node> {
        self.tree.get_default()
    }

    /// Root of the menu holding the default entry
    pub fn default_menu(&self) -> TreeResult<Option<Node>> {
        Ok(self.tree.default_items()?.map(|tree| tree.root().clone()))
    }

    pub fn set_active(&self, node: Node) {
        *self.active.write() = Some(node);
    }

    /// The active entry, falling back to (and remembering) the default
    pub fn active(&self) -> TreeResult<Node> {
        if let Some(node) = self.active.read().as_ref() {
            return Ok(node.clone());
        }
        let default = self.get_default()?;
        *self.active.write() = Some(default.clone());
        Ok(default)
    }

    pub fn search(&self, property: &str, value: &Value) -> TreeResult<Option<Node>> {
        self.tree.search(property, value)
    }

    /// Nested dropdown of menu `menu_id` ([`NodeId::DEFAULT`] for the default menu).
    ///
    /// Without an active entry and without a default, nothing is marked active.
    pub fn dropdown(&self, menu_id: NodeId) -> TreeResult<Vec<DropdownItem>> {
        let tree = self.items(menu_id)?;
        let active = self.active().optional()?.map(|node| node.id());
        Ok(project_dropdown(tree.items(), active, |node| {
            self.view(node).dropdown_label()
        }))
    }

    /// Search listing of every menu entry whose title contains `query`.
    ///
    /// Always reloads the menus first.
    pub fn search_entries(&self, query: &str) -> TreeResult<Vec<SearchEntry>> {
        self.tree.get_roots(true)?;
        let snapshot = self.tree.snapshot();
        Ok(search_entries(snapshot.nodes(), query, &self.search_section))
    }
}
