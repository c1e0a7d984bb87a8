//! Plan execution - deleting planned rows, children before parents.

use crate::{CascadeError, CascadeResult, DeletionPlan};
use cull_core::RowId;
use cull_schema::SchemaGraph;
use cull_store::RowStore;
use std::collections::BTreeMap;

/// Deletes a plan's rows table-by-table in the schema's deletion order.
pub struct Executor<'g> {
    schema: &'g SchemaGraph,
}

impl<'g> Executor<'g> {
    pub fn new(schema: &'g SchemaGraph) -> Self {
        Self { schema }
    }

    /// Delete every planned row, returning per-table deleted counts.
    ///
    /// Every planned table must be covered by the deletion order; a table
    /// outside it fails the whole call before any delete is issued. Skipping
    /// it silently would orphan that table's rows, which is exactly the
    /// defect this engine exists to prevent.
    pub fn execute(
        &self,
        store: &mut dyn RowStore,
        plan: &DeletionPlan,
    ) -> CascadeResult<BTreeMap<&'static str, u64>> {
        for table in plan.tables() {
            if self.schema.order_position(table).is_none() {
                return Err(CascadeError::unordered_table(table));
            }
        }

        let mut deleted: BTreeMap<&'static str, u64> = BTreeMap::new();
        for &table in self.schema.deletion_order() {
            let ids: Vec<RowId> = plan.ids(table).collect();
            if ids.is_empty() {
                continue;
            }
            let count = store.delete_rows(table, &ids)?;
            deleted.insert(table, count);
        }

        Ok(deleted)
    }
}
