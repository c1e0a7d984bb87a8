//! CULL Schema Graph
//!
//! A declarative description of how tables relate for deletion purposes:
//! which tables cascade-delete into which child tables (transitively or one
//! level only), and which tables instead nullify a foreign key when a
//! referenced row goes away.
//!
//! The graph is pure data, built once through SchemaBuilder and immutable
//! afterwards. Construction validates the declarations and derives the
//! children-first deletion order; adding a relationship means adding one
//! edge, never touching an algorithm.

mod builder;
mod edge;
mod error;
mod graph;

pub use builder::*;
pub use edge::*;
pub use error::*;
pub use graph::*;
