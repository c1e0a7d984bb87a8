//! In-memory table store.

use crate::{RowStore, StoreError, StoreResult};
use cull_core::{Fields, Row, RowId, Value};
use std::collections::{BTreeMap, HashMap};

/// ID allocator for rows.
#[derive(Debug)]
struct IdAllocator {
    next_row_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_row_id: 1 }
    }

    fn alloc(&mut self) -> RowId {
        let id = RowId::new(self.next_row_id);
        self.next_row_id += 1;
        id
    }
}

/// An in-memory row store.
///
/// Tables are created explicitly; rows live in a BTreeMap so scans are
/// deterministic. Row ids are allocated from a single sequence shared by all
/// tables, which keeps ids unique across the whole store.
#[derive(Debug)]
pub struct MemStore {
    /// Table name -> rows by id.
    tables: HashMap<String, BTreeMap<RowId, Row>>,
    /// ID allocator.
    id_alloc: IdAllocator,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    /// Create a table. Creating an existing table is a no-op.
    pub fn create_table(&mut self, table: impl Into<String>) {
        self.tables.entry(table.into()).or_default();
    }

    /// Insert a row with the given fields, allocating its id.
    pub fn insert(&mut self, table: &str, fields: Fields) -> StoreResult<RowId> {
        let id = self.id_alloc.alloc();
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::unknown_table(table))?;
        rows.insert(id, Row::new(id, fields));
        Ok(id)
    }

    /// Get a row by id.
    pub fn row(&self, table: &str, id: RowId) -> Option<&Row> {
        self.tables.get(table).and_then(|rows| rows.get(&id))
    }

    /// Set one field on one row. Handy for wiring fixtures.
    pub fn set_field(
        &mut self,
        table: &str,
        id: RowId,
        field: impl Into<String>,
        value: Value,
    ) -> StoreResult<()> {
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::unknown_table(table))?;
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::row_not_found(table, id))?;
        row.set(field.into(), value);
        Ok(())
    }

    /// Check whether a row exists.
    pub fn contains(&self, table: &str, id: RowId) -> bool {
        self.row(table, id).is_some()
    }

    /// Number of rows in a table (zero for unknown tables).
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, BTreeMap::len)
    }

    /// Names of all tables.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl RowStore for MemStore {
    fn rows_where(&self, table: &str, field: &str, value: RowId) -> StoreResult<Vec<Row>> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| StoreError::unknown_table(table))?;

        Ok(rows
            .values()
            .filter(|row| row.fk(field) == Some(value))
            .cloned()
            .collect())
    }

    fn delete_rows(&mut self, table: &str, ids: &[RowId]) -> StoreResult<u64> {
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::unknown_table(table))?;

        let mut deleted = 0u64;
        for id in ids {
            if rows.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn update_field(
        &mut self,
        table: &str,
        field: &str,
        value: Value,
        where_field: &str,
        where_value: RowId,
    ) -> StoreResult<u64> {
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::unknown_table(table))?;

        let mut updated = 0u64;
        for row in rows.values_mut() {
            if row.fk(where_field) == Some(where_value) {
                row.set(field.to_string(), value.clone());
                updated += 1;
            }
        }
        Ok(updated)
    }
}
