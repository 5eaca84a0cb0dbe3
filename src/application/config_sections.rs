//! Config-section manager
//!
//! Stores application settings as a forest: each root names a section and
//! its items are `name` / `value` entries.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::tree_manager::TreeManager;
use crate::config::ManagerConfig;
use crate::domain::entities::{Node, NodeId};
use crate::domain::ports::{RowSource, TreeEventSink};
use crate::error::{NotFound, TreeResult};
use crate::infrastructure::factories::{ConfigEntryFactory, NAME_FIELD, VALUE_FIELD};

/// One entry of a section as a flat record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRow {
    pub id: String,
    pub value: Value,
    pub section: String,
}

/// Entries of one section, in tree order
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSection {
    id: NodeId,
    name: String,
    entries: IndexMap<String, Value>,
}

impl ConfigSection {
    fn from_nodes<'a>(root: &Node, items: impl IntoIterator<Item = &'a Node>) -> Self {
        let entries = items
            .into_iter()
            .filter_map(|node| {
                let name = node.str_field(NAME_FIELD)?.to_string();
                let value = node.payload().get(VALUE_FIELD).cloned().unwrap_or(Value::Null);
                Some((name, value))
            })
            .collect();
        Self {
            id: root.id(),
            name: root.str_field(NAME_FIELD).unwrap_or_default().to_string(),
            entries,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of entry `name`, or `default` when the section has no such entry
    pub fn get<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.entries.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries as `{id, value, section}` records
    pub fn rows(&self) -> Vec<ConfigRow> {
        self.entries
            .iter()
            .map(|(name, value)| ConfigRow {
                id: name.clone(),
                value: value.clone(),
                section: self.name.clone(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConfigSection {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub struct ConfigManager<S> {
    tree: TreeManager<S, ConfigEntryFactory>,
}

impl<S: RowSource> ConfigManager<S> {
    pub fn new(source: S, config: &ManagerConfig) -> TreeResult<Self> {
        let manager = Self {
            tree: TreeManager::new(
                source,
                ConfigEntryFactory::new(config.columns.clone()),
                config.load_mode(),
            ),
        };
        if config.load_mode().is_eager() {
            manager.tree.get_roots(false)?;
        }
        Ok(manager)
    }

    pub fn with_events(mut self, events: Arc<dyn TreeEventSink>) -> Self {
        self.tree = self.tree.with_events(events);
        self
    }

    pub fn tree(&self) -> &TreeManager<S, ConfigEntryFactory> {
        &self.tree
    }

    /// Section names in load order
    pub fn sections(&self) -> TreeResult<Vec<String>> {
        Ok(self
            .tree
            .get_roots(false)?
            .iter()
            .filter_map(|root| root.str_field(NAME_FIELD))
            .map(str::to_string)
            .collect())
    }

    /// Section `name`; `NotFound::Section` when no root carries that name
    pub fn section(&self, name: &str) -> TreeResult<ConfigSection> {
        let roots = self.tree.get_roots(false)?;
        let root = roots
            .iter()
            .find(|root| root.str_field(NAME_FIELD) == Some(name))
            .ok_or_else(|| NotFound::Section(name.to_string()))?;

        let tree = self.tree.get_items(root.id(), false)?;
        Ok(ConfigSection::from_nodes(tree.root(), tree.items()))
    }
}
