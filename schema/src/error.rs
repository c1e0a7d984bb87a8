//! Schema construction errors and warnings.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during schema graph construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate table: {0}")]
    DuplicateTable(&'static str),

    #[error("Unknown table in edge: {0}")]
    UnknownTable(&'static str),

    #[error("Invalid identifier: {0}")]
    InvalidName(&'static str),

    #[error("Duplicate cascade edge: {parent} -> {child} via {fk}")]
    DuplicateEdge {
        parent: &'static str,
        child: &'static str,
        fk: &'static str,
    },

    #[error("Cascade cycle detected involving table: {0}")]
    CascadeCycle(&'static str),
}

/// A non-fatal finding from schema validation.
///
/// Warnings do not fail the build; they are kept on the graph for callers
/// to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaWarning {
    /// A one-level cascade points at a table that has its own cascade edges.
    /// Deleting through the shallow edge strands that table's dependents.
    ShallowIntoCascading {
        parent: &'static str,
        child: &'static str,
    },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::ShallowIntoCascading { parent, child } => write!(
                f,
                "shallow edge {} -> {} stops above a cascading table",
                parent, child
            ),
        }
    }
}
