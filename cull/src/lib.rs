//! CULL - cascade deletion for the evaluation platform data layer.
//!
//! The backing store enforces no referential actions, so deleting a row is
//! never just one delete: this crate declares how the platform's tables
//! relate ([`platform_schema`]) and exposes [`Cascades`], the entry point
//! route handlers and admin tooling call to delete a root row together with
//! everything that references it.

mod facade;
mod platform;

pub use facade::*;
pub use platform::*;

pub use cull_core::{fields, Fields, Row, RowId, Value};
pub use cull_engine::{
    CascadeEngine, CascadeError, CascadeResult, Collector, DeleteReport, DeletionPlan, Executor,
    Nullifier,
};
pub use cull_schema::{
    CascadeEdge, SchemaBuilder, SchemaError, SchemaGraph, SchemaWarning, SetNullEdge,
};
pub use cull_store::{MemStore, RowStore, StoreError, StoreResult};
