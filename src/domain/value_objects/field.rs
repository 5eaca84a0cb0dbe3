//! Field value object - names a node attribute for lookups
//!
//! Replaces "any property" access with a closed set of structural fields
//! plus an open payload name.

use serde_json::Value;

/// Attribute of a node that can be read or searched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    RootId,
    Left,
    Right,
    Depth,
    IsDefault,
    /// Any manager-specific payload column
    Payload(String),
}

impl Field {
    /// Parses a field name; unknown names address the payload.
    ///
    /// Both logical names (`left`, `isDefault`) and the conventional
    /// nested-set column names (`lft`, `rgt`, `tree`) are accepted. Managers
    /// with renamed columns go through [`ColumnMap::field_for`] instead.
    ///
    /// [`ColumnMap::field_for`]: super::ColumnMap::field_for
    pub fn parse(name: &str) -> Self {
        match name {
            "id" => Field::Id,
            "root_id" | "rootId" | "tree" => Field::RootId,
            "left" | "lft" => Field::Left,
            "right" | "rgt" => Field::Right,
            "depth" => Field::Depth,
            "is_default" | "isDefault" => Field::IsDefault,
            other => Field::Payload(other.to_string()),
        }
    }

    pub fn is_payload(&self) -> bool {
        matches!(self, Field::Payload(_))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::RootId => write!(f, "root_id"),
            Field::Left => write!(f, "left"),
            Field::Right => write!(f, "right"),
            Field::Depth => write!(f, "depth"),
            Field::IsDefault => write!(f, "is_default"),
            Field::Payload(name) => write!(f, "{}", name),
        }
    }
}

/// Loose equality used by searches and row filters.
///
/// Storage drivers hand back numbers as strings and booleans as 0/1, so a
/// stored `"3"` matches a searched `3` and a stored `1` matches `true`.
pub fn values_match(stored: &Value, wanted: &Value) -> bool {
    if stored == wanted {
        return true;
    }
    if let (Some(a), Some(b)) = (as_integer(stored), as_integer(wanted)) {
        return a == b;
    }
    match (as_number(stored), as_number(wanted)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Exact integer view; ids beyond 2^53 must not collapse through `f64`
fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(i128::from)
            .or_else(|| n.as_i64().map(i128::from)),
        Value::Bool(b) => Some(i128::from(*b)),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
