//! The Cascades facade - named entry points over the engine.

use cull_core::RowId;
use cull_engine::{CascadeEngine, CascadeResult, DeleteReport};
use cull_schema::SchemaGraph;
use cull_store::RowStore;

use crate::platform_schema;

/// Cascade deletion over one store.
///
/// Owns the store and the schema; every operation plans, unlinks and
/// deletes one root (or a batch of roots) and reports per-table counts.
/// Calls are independent; nothing is shared or retained between them.
pub struct Cascades<S> {
    schema: SchemaGraph,
    store: S,
}

impl<S: RowStore> Cascades<S> {
    /// Create a facade over the platform schema.
    pub fn new(store: S) -> Self {
        Self::with_schema(platform_schema(), store)
    }

    /// Create a facade over a custom schema graph.
    pub fn with_schema(schema: SchemaGraph, store: S) -> Self {
        Self { schema, store }
    }

    /// Get the schema graph.
    pub fn schema(&self) -> &SchemaGraph {
        &self.schema
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the facade, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Cascade-delete one row of any declared table.
    pub fn cascade_delete(&mut self, table: &str, id: RowId) -> CascadeResult<DeleteReport> {
        CascadeEngine::new(&self.schema).delete(&mut self.store, table, id)
    }

    /// Cascade-delete several rows of one table, summing per-table counts.
    pub fn batch_cascade_delete(
        &mut self,
        table: &str,
        ids: &[RowId],
    ) -> CascadeResult<DeleteReport> {
        CascadeEngine::new(&self.schema).delete_many(&mut self.store, table, ids)
    }

    /// Delete a supervision project and its full tree.
    pub fn delete_project(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("projects", id)
    }

    /// Delete an indicator system, its indicator tree and dependents.
    pub fn delete_indicator_system(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("indicator_systems", id)
    }

    /// Delete a school; its users are unlinked, not deleted.
    pub fn delete_school(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("schools", id)
    }

    /// Delete a district and its sub-districts; schools are unlinked.
    pub fn delete_district(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("districts", id)
    }

    /// Delete a data-collection tool, its form layout and submissions.
    pub fn delete_data_tool(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("data_tools", id)
    }

    /// Delete an element library and its element tree.
    pub fn delete_element_library(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("element_libraries", id)
    }

    /// Delete a compliance rule and its conditions and results.
    pub fn delete_compliance_rule(&mut self, id: RowId) -> CascadeResult<DeleteReport> {
        self.cascade_delete("compliance_rules", id)
    }
}
