//! Deletion plans.

use cull_core::RowId;
use std::collections::{BTreeMap, BTreeSet};

/// The rows one cascade delete will remove, per table, deduplicated.
///
/// Plans are built fresh for every delete call and discarded afterwards.
/// BTree storage keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    tables: BTreeMap<&'static str, BTreeSet<RowId>>,
}

impl DeletionPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the plan. Returns false if it was already planned.
    pub fn insert(&mut self, table: &'static str, id: RowId) -> bool {
        self.tables.entry(table).or_default().insert(id)
    }

    /// Check whether a row is planned.
    pub fn contains(&self, table: &str, id: RowId) -> bool {
        self.tables.get(table).is_some_and(|ids| ids.contains(&id))
    }

    /// Tables with at least one planned row.
    pub fn tables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    /// Planned row ids for a table, in id order.
    pub fn ids(&self, table: &str) -> impl Iterator<Item = RowId> + '_ {
        self.tables
            .get(table)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    /// Number of tables in the plan.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of planned rows across all tables.
    pub fn row_count(&self) -> usize {
        self.tables.values().map(BTreeSet::len).sum()
    }

    /// True if nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
