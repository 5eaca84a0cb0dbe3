//! Config entry factory
//!
//! Roots are sections and items are entries; both are addressed by their
//! `name` column, so a row without a string name cannot be decoded.

use serde_json::Value;

use crate::domain::entities::{Node, RawRow};
use crate::domain::ports::{decode_structure, DecodeError, ObjectFactory};
use crate::domain::value_objects::ColumnMap;

pub const NAME_FIELD: &str = "name";
pub const VALUE_FIELD: &str = "value";

#[derive(Debug, Clone, Default)]
pub struct ConfigEntryFactory {
    columns: ColumnMap,
}

impl ConfigEntryFactory {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }
}

impl ObjectFactory for ConfigEntryFactory {
    fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    fn from_row(&self, row: RawRow) -> Result<Node, DecodeError> {
        let node = decode_structure(&self.columns, row)?;
        match node.payload().get(NAME_FIELD) {
            Some(Value::String(name)) if !name.is_empty() => Ok(node),
            Some(Value::String(_)) => {
                Err(DecodeError::new(NAME_FIELD, "name is empty").for_row(node.id()))
            }
            Some(other) => Err(DecodeError::new(
                NAME_FIELD,
                format!("expected a string, got {}", other),
            )
            .for_row(node.id())),
            None => Err(DecodeError::new(NAME_FIELD, "missing value").for_row(node.id())),
        }
    }
}
