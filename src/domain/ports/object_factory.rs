//! ObjectFactory port - turns raw rows into nodes
//!
//! Every manager type brings its own factory so it can transform payload
//! columns (for example decoding a JSON `params` column) before the node is
//! built. A column that is present but unreadable is an error; factories
//! never drop or replace it silently.

use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::{Node, NodeId, RawRow};
use crate::domain::value_objects::ColumnMap;

/// A single row could not be decoded
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot decode column '{column}'{}: {reason}", row_suffix(.row))]
pub struct DecodeError {
    /// Id of the offending row, when it could be read
    pub row: Option<NodeId>,
    pub column: String,
    pub reason: String,
}

fn row_suffix(row: &Option<NodeId>) -> String {
    row.map(|id| format!(" of row {}", id)).unwrap_or_default()
}

impl DecodeError {
    pub fn new(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            row: None,
            column: column.into(),
            reason: reason.into(),
        }
    }

    pub fn for_row(mut self, row: NodeId) -> Self {
        self.row = Some(row);
        self
    }
}

/// Converts raw rows into nodes for one manager type
pub trait ObjectFactory: Send + Sync {
    /// Column names used to read the structural fields
    fn columns(&self) -> &ColumnMap;

    /// Decode one row
    fn from_row(&self, row: RawRow) -> Result<Node, DecodeError>;
}

/// Reads the structural columns of `row` and moves every other column into
/// the node payload.
///
/// Factories call this first and then post-process the payload.
pub fn decode_structure(columns: &ColumnMap, row: RawRow) -> Result<Node, DecodeError> {
    let id = NodeId::new(read_unsigned(&row, &columns.id)?);
    let tag = |err: DecodeError| err.for_row(id);

    let root_id = match row.get(&columns.root) {
        None | Some(Value::Null) => id,
        Some(_) => NodeId::new(read_unsigned(&row, &columns.root).map_err(tag)?),
    };
    let left = read_integer(&row, &columns.left).map_err(tag)?;
    let right = read_integer(&row, &columns.right).map_err(tag)?;
    let depth = u32::try_from(read_unsigned(&row, &columns.depth).map_err(tag)?)
        .map_err(|_| DecodeError::new(&columns.depth, "depth out of range").for_row(id))?;
    let is_default = match row.get(&columns.is_default) {
        None | Some(Value::Null) => false,
        Some(value) => read_flag(value)
            .ok_or_else(|| DecodeError::new(&columns.is_default, "expected a boolean or 0/1"))
            .map_err(tag)?,
    };

    let payload = row
        .into_iter()
        .filter(|(column, _)| !columns.is_structural(column))
        .collect();

    Ok(Node::new(id, root_id, left, right, depth)
        .with_default(is_default)
        .with_payload(payload))
}

fn read_integer(row: &RawRow, column: &str) -> Result<i64, DecodeError> {
    match row.get(column) {
        None | Some(Value::Null) => Err(DecodeError::new(column, "missing value")),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| DecodeError::new(column, format!("{} is not an integer", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::new(column, format!("'{}' is not an integer", s))),
        Some(other) => Err(DecodeError::new(
            column,
            format!("expected an integer, got {}", other),
        )),
    }
}

fn read_unsigned(row: &RawRow, column: &str) -> Result<u64, DecodeError> {
    let value = read_integer(row, column)?;
    u64::try_from(value).map_err(|_| DecodeError::new(column, format!("{} is negative", value)))
}

fn read_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    }
}
