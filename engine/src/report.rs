//! Delete reports.

use std::collections::BTreeMap;

/// Outcome of one cascade delete (or a whole batch, counts summed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Rows deleted, per table.
    pub deleted: BTreeMap<&'static str, u64>,
    /// Rows unlinked by set-null edges, per referencing table.
    pub unlinked: BTreeMap<&'static str, u64>,
}

impl DeleteReport {
    /// Create a report from the executor and nullifier outputs.
    pub fn new(
        deleted: BTreeMap<&'static str, u64>,
        unlinked: BTreeMap<&'static str, u64>,
    ) -> Self {
        Self { deleted, unlinked }
    }

    /// Rows deleted in one table.
    pub fn deleted_in(&self, table: &str) -> u64 {
        self.deleted.get(table).copied().unwrap_or(0)
    }

    /// Rows unlinked in one table.
    pub fn unlinked_in(&self, table: &str) -> u64 {
        self.unlinked.get(table).copied().unwrap_or(0)
    }

    /// Total rows deleted across all tables.
    pub fn total_deleted(&self) -> u64 {
        self.deleted.values().sum()
    }

    /// Fold another report into this one, summing per-table counts.
    pub fn merge(&mut self, other: DeleteReport) {
        for (table, count) in other.deleted {
            *self.deleted.entry(table).or_insert(0) += count;
        }
        for (table, count) in other.unlinked {
            *self.unlinked.entry(table).or_insert(0) += count;
        }
    }
}
