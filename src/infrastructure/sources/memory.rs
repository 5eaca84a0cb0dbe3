//! In-memory row source
//!
//! Holds a snapshot of nested-set rows (typically loaded from a JSON export)
//! and answers the three `RowSource` queries over it. Every query is counted
//! so callers can check how many storage round-trips a lookup cost.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};

use anyhow::{bail, Context};
use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::entities::{NodeId, RawRow};
use crate::domain::ports::RowSource;
use crate::domain::value_objects::{values_match, ColumnMap};

/// Number of queries served, per `RowSource` method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCounts {
    pub all: usize,
    pub filtered: usize,
    pub root: usize,
}

impl QueryCounts {
    pub fn total(&self) -> usize {
        self.all + self.filtered + self.root
    }
}

#[derive(Debug, Default)]
struct Counters {
    all: AtomicUsize,
    filtered: AtomicUsize,
    root: AtomicUsize,
}

#[derive(Debug)]
pub struct InMemoryRowSource {
    columns: ColumnMap,
    rows: RwLock<Vec<RawRow>>,
    counters: Counters,
    failing: AtomicBool,
}

impl InMemoryRowSource {
    /// Source over `rows` using the default column names
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            columns: ColumnMap::default(),
            rows: RwLock::new(rows),
            counters: Counters::default(),
            failing: AtomicBool::new(false),
        }
    }

    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    /// Parses a JSON array of row objects
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let rows: Vec<RawRow> =
            serde_json::from_str(json).context("row snapshot must be a JSON array of objects")?;
        Ok(Self::new(rows))
    }

    /// Reads a JSON row snapshot from disk
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read row snapshot {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("invalid row snapshot {}", path.display()))
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Swaps the stored rows; managers keep serving their cache until reloaded
    pub fn replace_rows(&self, rows: Vec<RawRow>) {
        *self.rows.write() = rows;
    }

    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    /// Makes every following query fail until switched off again
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, AtomicOrdering::SeqCst);
    }

    pub fn queries(&self) -> QueryCounts {
        QueryCounts {
            all: self.counters.all.load(AtomicOrdering::SeqCst),
            filtered: self.counters.filtered.load(AtomicOrdering::SeqCst),
            root: self.counters.root.load(AtomicOrdering::SeqCst),
        }
    }

    pub fn reset_queries(&self) {
        self.counters.all.store(0, AtomicOrdering::SeqCst);
        self.counters.filtered.store(0, AtomicOrdering::SeqCst);
        self.counters.root.store(0, AtomicOrdering::SeqCst);
    }

    fn query(
        &self,
        counter: &AtomicUsize,
        keep: impl Fn(&RawRow) -> bool,
    ) -> anyhow::Result<Vec<RawRow>> {
        counter.fetch_add(1, AtomicOrdering::SeqCst);
        if self.failing.load(AtomicOrdering::SeqCst) {
            bail!("row source unavailable");
        }

        let mut rows: Vec<RawRow> = self
            .rows
            .read()
            .iter()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.compare(a, b));
        Ok(rows)
    }

    /// Orders by root id, then by left
    fn compare(&self, a: &RawRow, b: &RawRow) -> Ordering {
        let key = |row: &RawRow| (self.root_of(row), integer(row.get(&self.columns.left)));
        key(a).cmp(&key(b))
    }

    fn root_of(&self, row: &RawRow) -> Option<i64> {
        match row.get(&self.columns.root) {
            None | Some(Value::Null) => integer(row.get(&self.columns.id)),
            root => integer(root),
        }
    }
}

impl RowSource for InMemoryRowSource {
    fn fetch_all(&self) -> anyhow::Result<Vec<RawRow>> {
        self.query(&self.counters.all, |_| true)
    }

    fn fetch_where(&self, column: &str, value: &Value) -> anyhow::Result<Vec<RawRow>> {
        self.query(&self.counters.filtered, |row| {
            row.get(column)
                .is_some_and(|stored| values_match(stored, value))
        })
    }

    fn fetch_root(&self, root: NodeId) -> anyhow::Result<Vec<RawRow>> {
        let wanted = i64::try_from(root.get()).ok();
        self.query(&self.counters.root, |row| {
            wanted.is_some() && self.root_of(row) == wanted
        })
    }
}

fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
