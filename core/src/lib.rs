//! CULL Core Types
//!
//! This crate provides the foundational types used throughout the CULL system:
//! - Identity type (RowId)
//! - Value types (the Value enum with all scalar and reference types)
//! - Row structure (a stored row with its field values)

mod id;
mod row;
mod value;

pub use id::*;
pub use row::*;
pub use value::*;
