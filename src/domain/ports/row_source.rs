//! RowSource port - abstraction over the nested-set table
//!
//! The manager never builds queries itself; it asks the row source for one of
//! three shapes of result. Rows must come back ordered by root, then by the
//! left coordinate within each root.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

use crate::domain::entities::{NodeId, RawRow};

/// Abstract source of flattened nested-set rows
///
/// Each call is one storage round-trip. This trait is implemented by the
/// infrastructure layer.
pub trait RowSource: Send + Sync {
    /// All rows of every tree
    fn fetch_all(&self) -> Result<Vec<RawRow>>;

    /// Rows whose `column` equals `value`
    fn fetch_where(&self, column: &str, value: &Value) -> Result<Vec<RawRow>>;

    /// All rows of the tree rooted at `root`, root row included
    fn fetch_root(&self, root: NodeId) -> Result<Vec<RawRow>>;
}

impl<T: RowSource + ?Sized> RowSource for Arc<T> {
    fn fetch_all(&self) -> Result<Vec<RawRow>> {
        (**self).fetch_all()
    }

    fn fetch_where(&self, column: &str, value: &Value) -> Result<Vec<RawRow>> {
        (**self).fetch_where(column, value)
    }

    fn fetch_root(&self, root: NodeId) -> Result<Vec<RawRow>> {
        (**self).fetch_root(root)
    }
}
