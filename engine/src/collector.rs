//! Cascade collection - planning which rows a delete implies.

use crate::{CascadeError, CascadeResult, DeletionPlan};
use cull_core::RowId;
use cull_schema::SchemaGraph;
use cull_store::RowStore;
use std::collections::HashSet;

/// Walks the schema graph from a root row and accumulates the deletion plan.
pub struct Collector<'g> {
    schema: &'g SchemaGraph,
}

impl<'g> Collector<'g> {
    pub fn new(schema: &'g SchemaGraph) -> Self {
        Self { schema }
    }

    /// Collect every row reachable from the root through cascade edges.
    ///
    /// Transitive edges are followed all the way down; one-level edges add
    /// the direct children and stop. A visited set keyed by (table, id)
    /// makes self-referential tables and diamond-shaped reachability safe:
    /// each row is expanded at most once, so the walk terminates on any
    /// data, cyclic or not.
    ///
    /// A root with no children yields a plan containing only the root. Any
    /// store failure aborts the whole collection; partial plans never
    /// escape.
    pub fn collect(
        &self,
        store: &dyn RowStore,
        table: &str,
        id: RowId,
    ) -> CascadeResult<DeletionPlan> {
        let root = self
            .schema
            .canonical(table)
            .ok_or_else(|| CascadeError::unknown_table(table))?;

        let mut plan = DeletionPlan::new();
        let mut visited: HashSet<(&'static str, RowId)> = HashSet::new();
        let mut pending: Vec<(&'static str, RowId)> = vec![(root, id)];

        while let Some((table, id)) = pending.pop() {
            if !visited.insert((table, id)) {
                continue;
            }
            plan.insert(table, id);

            for edge in self.schema.cascades_from(table) {
                let children = store.rows_where(edge.child, edge.fk, id)?;
                for child in children {
                    if edge.transitive {
                        pending.push((edge.child, child.id));
                    } else {
                        plan.insert(edge.child, child.id);
                    }
                }
            }
        }

        Ok(plan)
    }
}
