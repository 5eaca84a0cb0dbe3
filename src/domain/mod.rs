//! Domain Layer
//!
//! Pure nested-set logic without storage dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Rows and nodes (RawRow, Node, NodeId)
//! - `value_objects/` - Immutable value types (Field, LoadMode, ColumnMap)
//! - `services/` - Stateless algorithms (TreeBuilder, dropdown projection, search entries)
//! - `ports/` - Interface definitions for infrastructure (RowSource, ObjectFactory, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never queries storage directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All row access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
