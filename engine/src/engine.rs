//! The CascadeEngine - collect, unlink, execute.

use crate::{CascadeError, CascadeResult, Collector, DeleteReport, Executor, Nullifier};
use cull_core::RowId;
use cull_schema::SchemaGraph;
use cull_store::RowStore;

/// Runs the full cascade sequence for root rows.
///
/// One `delete` call is strictly sequential: the plan is collected in full,
/// then set-null references are rewritten, then the planned rows are deleted
/// children-first. The engine keeps no state across calls, so concurrent
/// deletes of disjoint roots are safe; overlapping roots are the caller's
/// problem, the store being the only synchronization point.
pub struct CascadeEngine<'g> {
    schema: &'g SchemaGraph,
}

impl<'g> CascadeEngine<'g> {
    pub fn new(schema: &'g SchemaGraph) -> Self {
        Self { schema }
    }

    /// Cascade-delete one root row.
    ///
    /// On error some writes may already have been applied; the engine does
    /// not retry or compensate.
    pub fn delete(
        &self,
        store: &mut dyn RowStore,
        table: &str,
        id: RowId,
    ) -> CascadeResult<DeleteReport> {
        let plan = Collector::new(self.schema).collect(&*store, table, id)?;
        let unlinked = Nullifier::new(self.schema).apply(store, &plan)?;
        let deleted = Executor::new(self.schema).execute(store, &plan)?;
        Ok(DeleteReport::new(deleted, unlinked))
    }

    /// Cascade-delete a batch of root rows of one table, summing counts.
    ///
    /// Each id runs as an independent full cascade; there is no atomicity
    /// across the batch. A failure partway through aborts with the counts
    /// already applied, which stay applied.
    pub fn delete_many(
        &self,
        store: &mut dyn RowStore,
        table: &str,
        ids: &[RowId],
    ) -> CascadeResult<DeleteReport> {
        let mut report = DeleteReport::default();
        for &id in ids {
            match self.delete(store, table, id) {
                Ok(one) => report.merge(one),
                Err(source) => {
                    return Err(CascadeError::BatchAborted {
                        at: id,
                        applied: report,
                        source: Box::new(source),
                    })
                }
            }
        }
        Ok(report)
    }
}
