//! Column map - names the storage columns holding nested-set structure

use serde::{Deserialize, Serialize};

use super::Field;

/// Storage column names for the structural node fields.
///
/// Defaults match the usual nested-set table layout (`lft`, `rgt`, `tree`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub id: String,
    /// Root id column; null means the row is a root itself
    pub root: String,
    pub left: String,
    pub right: String,
    pub depth: String,
    pub is_default: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            root: "tree".to_string(),
            left: "lft".to_string(),
            right: "rgt".to_string(),
            depth: "depth".to_string(),
            is_default: "is_default".to_string(),
        }
    }
}

impl ColumnMap {
    /// Storage column that holds `field`
    pub fn column_for<'a>(&'a self, field: &'a Field) -> &'a str {
        match field {
            Field::Id => &self.id,
            Field::RootId => &self.root,
            Field::Left => &self.left,
            Field::Right => &self.right,
            Field::Depth => &self.depth,
            Field::IsDefault => &self.is_default,
            Field::Payload(name) => name,
        }
    }

    /// Field addressed by `name`.
    ///
    /// A configured column name selects its structural field; any other name
    /// falls back to [`Field::parse`].
    pub fn field_for(&self, name: &str) -> Field {
        let structural = [
            (&self.id, Field::Id),
            (&self.root, Field::RootId),
            (&self.left, Field::Left),
            (&self.right, Field::Right),
            (&self.depth, Field::Depth),
            (&self.is_default, Field::IsDefault),
        ];
        structural
            .into_iter()
            .find(|(column, _)| column.as_str() == name)
            .map(|(_, field)| field)
            .unwrap_or_else(|| Field::parse(name))
    }

    /// True if `column` carries one of the structural fields
    pub fn is_structural(&self, column: &str) -> bool {
        [
            &self.id,
            &self.root,
            &self.left,
            &self.right,
            &self.depth,
            &self.is_default,
        ]
        .iter()
        .any(|c| c.as_str() == column)
    }
}
