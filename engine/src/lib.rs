//! CULL Cascade Engine
//!
//! This crate turns one delete request into the full set of writes the
//! schema graph implies:
//! - Collector walks the graph and plans every row to delete
//! - Nullifier unlinks set-null references before anything is deleted
//! - Executor deletes the planned rows, children before parents
//! - CascadeEngine binds the three steps for single roots and batches
//!
//! All state is local to one call; the engine holds only a reference to the
//! schema graph, performs no locking, no retry and no logging, and drives
//! every read and write through the RowStore port.

mod collector;
mod engine;
mod error;
mod executor;
mod nullifier;
mod plan;
mod report;

pub use collector::*;
pub use engine::*;
pub use error::*;
pub use executor::*;
pub use nullifier::*;
pub use plan::*;
pub use report::*;
