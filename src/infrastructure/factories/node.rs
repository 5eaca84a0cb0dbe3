//! Plain node factory: structure plus untouched payload

use crate::domain::entities::{Node, RawRow};
use crate::domain::ports::{decode_structure, DecodeError, ObjectFactory};
use crate::domain::value_objects::ColumnMap;

#[derive(Debug, Clone, Default)]
pub struct NodeFactory {
    columns: ColumnMap,
}

impl NodeFactory {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }
}

impl ObjectFactory for NodeFactory {
    fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    fn from_row(&self, row: RawRow) -> Result<Node, DecodeError> {
        decode_structure(&self.columns, row)
    }
}
