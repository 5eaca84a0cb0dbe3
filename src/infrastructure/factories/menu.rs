//! Menu item factory
//!
//! Menu rows carry their route parameters as a JSON-encoded string column.
//! The factory decodes it into an object so consumers never see the raw
//! text. Empty strings and nulls mean "no parameters" and drop the field.

use serde_json::Value;

use crate::domain::entities::{Node, RawRow};
use crate::domain::ports::{decode_structure, DecodeError, ObjectFactory};
use crate::domain::value_objects::ColumnMap;

pub const DEFAULT_PARAMS_FIELD: &str = "params";

#[derive(Debug, Clone)]
pub struct MenuItemFactory {
    columns: ColumnMap,
    params_field: String,
}

impl Default for MenuItemFactory {
    fn default() -> Self {
        Self::new(ColumnMap::default(), DEFAULT_PARAMS_FIELD)
    }
}

impl MenuItemFactory {
    pub fn new(columns: ColumnMap, params_field: impl Into<String>) -> Self {
        Self {
            columns,
            params_field: params_field.into(),
        }
    }

    pub fn params_field(&self) -> &str {
        &self.params_field
    }
}

impl ObjectFactory for MenuItemFactory {
    fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    fn from_row(&self, row: RawRow) -> Result<Node, DecodeError> {
        let mut node = decode_structure(&self.columns, row)?;
        let id = node.id();

        let payload = node.payload_mut();
        let Some(raw) = payload.remove(&self.params_field) else {
            return Ok(node);
        };
        if let Some(params) = decode_params(raw)
            .map_err(|reason| DecodeError::new(&self.params_field, reason).for_row(id))?
        {
            payload.insert(self.params_field.clone(), params);
        }
        Ok(node)
    }
}

fn decode_params(raw: Value) -> Result<Option<Value>, String> {
    match raw {
        Value::Null => Ok(None),
        Value::Object(_) => Ok(Some(raw)),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value @ Value::Object(_)) => Ok(Some(value)),
            Ok(other) => Err(format!("expected a JSON object, got {}", other)),
            Err(err) => Err(format!("invalid JSON: {}", err)),
        },
        other => Err(format!("expected a JSON object, got {}", other)),
    }
}
