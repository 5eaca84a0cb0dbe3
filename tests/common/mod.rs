//! Common test utilities for nestset contract and property tests.
//!
//! This module provides:
//! - Fixtures: menu and config row snapshots
//! - Builders: managers wired to a counting in-memory source

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
