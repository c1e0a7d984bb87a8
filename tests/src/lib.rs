//! Integration-test support for CULL.
//!
//! Fixtures seed a MemStore with platform data shaped like real evaluation
//! projects; the store doubles inject failures at chosen points so the
//! abort paths can be exercised end to end.


pub mod prelude {
    pub use crate::fixtures::*;
    pub use cull::{
        fields, platform_schema, CascadeEngine, CascadeError, Cascades, Collector, DeleteReport,
        DeletionPlan, MemStore, Row, RowId, RowStore, SchemaBuilder, SchemaGraph, StoreError,
        StoreResult, Value,
    };
}
