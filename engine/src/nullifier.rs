//! Set-null unlinking - run strictly before execution.

use crate::{CascadeResult, DeletionPlan};
use cull_core::Value;
use cull_schema::SchemaGraph;
use cull_store::RowStore;
use std::collections::BTreeMap;

/// Rewrites set-null foreign keys away from rows that are about to be
/// deleted.
///
/// Only set-null edges whose target table actually appears in the plan are
/// relevant; edges into untouched tables are skipped. This must run before
/// the executor: the update matches referencing rows by the target id, which
/// stops working once the target rows are gone.
pub struct Nullifier<'g> {
    schema: &'g SchemaGraph,
}

impl<'g> Nullifier<'g> {
    pub fn new(schema: &'g SchemaGraph) -> Self {
        Self { schema }
    }

    /// Null out every reference into the planned rows. Returns the number of
    /// rows unlinked per referencing table.
    pub fn apply(
        &self,
        store: &mut dyn RowStore,
        plan: &DeletionPlan,
    ) -> CascadeResult<BTreeMap<&'static str, u64>> {
        let mut unlinked: BTreeMap<&'static str, u64> = BTreeMap::new();

        for table in plan.tables() {
            for edge in self.schema.set_nulls_into(table) {
                for id in plan.ids(table) {
                    let touched =
                        store.update_field(edge.referencing, edge.fk, Value::Null, edge.fk, id)?;
                    if touched > 0 {
                        *unlinked.entry(edge.referencing).or_insert(0) += touched;
                    }
                }
            }
        }

        Ok(unlinked)
    }
}
