//! Error types for nestset
//!
//! Uses `thiserror` for library errors. Builder, factory and lookup failures
//! each keep their own type and convert into [`TreeError`] at the manager.

use thiserror::Error;

use crate::domain::entities::NodeId;
use crate::domain::ports::DecodeError;
use crate::domain::services::MalformedTreeError;

/// Result type alias for tree manager operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Something a caller asked for does not exist.
///
/// Recoverable: "require" accessors surface it, "optional" accessors map it
/// to an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// No node in the forest carries the default flag
    #[error("no default item has been set")]
    NoDefault,

    /// The row source has no rows for this root
    #[error("no items found for root {0}")]
    Root(NodeId),

    /// No config section with this name
    #[error("config section '{0}' not found")]
    Section(String),
}

/// Main error type for tree manager operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// Row source returned rows that violate nested-set integrity
    #[error(transparent)]
    MalformedTree(#[from] MalformedTreeError),

    /// A row's payload could not be decoded into a node
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Requested node, root or section is absent
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// A default root was resolved but none of its nodes is flagged default
    #[error("root {root} was resolved as holding the default item, but no item in it is flagged default")]
    InconsistentDefault { root: NodeId },

    /// Row source query failed
    #[error("row source query failed: {0:#}")]
    Source(#[source] anyhow::Error),
}

impl TreeError {
    /// Returns true if this is a recoverable "not found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound(_))
    }
}

/// Maps `NotFound` to `Ok(None)`, passing other errors through.
///
/// Used by the optional-style accessors.
pub(crate) trait OptionalExt<T> {
    fn optional(self) -> TreeResult<Option<T>>;
}

impl<T> OptionalExt<T> for TreeResult<T> {
    fn optional(self) -> TreeResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(TreeError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
