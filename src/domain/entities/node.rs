//! Node entity - one element of a nested-set tree
//!
//! Nodes are decoded from rows by an `ObjectFactory` and arranged into trees
//! by the `TreeBuilder`. The structural fields are fixed; everything a
//! particular manager cares about (title, route, params...) lives in the
//! payload map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::Field;

/// Depth of a root node. Children of a node at depth `d` sit at `d + 1`.
pub const ROOT_DEPTH: u32 = 0;

/// Identifier of a node, unique across the whole row source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Placeholder id meaning "the root that holds the default node"
    pub const DEFAULT: NodeId = NodeId(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns true for the [`NodeId::DEFAULT`] placeholder
    pub fn is_default_placeholder(self) -> bool {
        self == Self::DEFAULT
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tree element with nested-set coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: NodeId,
    /// Id of the root this node belongs to (equals `id` for roots)
    root_id: NodeId,
    left: i64,
    right: i64,
    depth: u32,
    is_default: bool,
    /// Manager-specific fields
    payload: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(id: NodeId, root_id: NodeId, left: i64, right: i64, depth: u32) -> Self {
        Self {
            id,
            root_id,
            left,
            right,
            depth,
            is_default: false,
            payload: BTreeMap::new(),
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_payload(mut self, payload: BTreeMap<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn payload(&self) -> &BTreeMap<String, Value> {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.payload
    }

    /// Payload field as a string slice, if present and a string
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.payload.get(name).and_then(Value::as_str)
    }

    /// A node without descendants (`right - left == 1`)
    pub fn is_leaf(&self) -> bool {
        self.right.checked_sub(self.left) == Some(1)
    }

    /// A node that is the top of its own tree
    pub fn is_root(&self) -> bool {
        self.id == self.root_id
    }

    /// Number of descendants implied by the interval width
    pub fn descendant_count(&self) -> usize {
        let width = self.right.saturating_sub(self.left).saturating_sub(1);
        usize::try_from(width / 2).unwrap_or(0)
    }

    /// True if `other`'s interval lies strictly inside this node's interval
    pub fn contains(&self, other: &Node) -> bool {
        self.root_id == other.root_id && self.left < other.left && other.right < self.right
    }

    /// Reads a structural field or a payload entry by name
    pub fn get(&self, name: &str) -> Option<Value> {
        self.field(&Field::parse(name))
    }

    /// Reads a field
    pub fn field(&self, field: &Field) -> Option<Value> {
        match field {
            Field::Id => Some(Value::from(self.id.get())),
            Field::RootId => Some(Value::from(self.root_id.get())),
            Field::Left => Some(Value::from(self.left)),
            Field::Right => Some(Value::from(self.right)),
            Field::Depth => Some(Value::from(self.depth)),
            Field::IsDefault => Some(Value::from(self.is_default)),
            Field::Payload(name) => self.payload.get(name).cloned(),
        }
    }
}
