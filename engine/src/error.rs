//! Cascade engine error types.

use crate::DeleteReport;
use cull_core::RowId;
use cull_store::StoreError;
use thiserror::Error;

/// Result type for cascade operations.
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Errors that can occur while planning or executing a cascade delete.
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Table missing from deletion order: {table}")]
    UnorderedTable { table: &'static str },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A batch stopped partway through. Cascades already applied stay
    /// applied; `applied` carries their summed counts.
    #[error("Batch aborted at id {at}: {source}")]
    BatchAborted {
        at: RowId,
        applied: DeleteReport,
        source: Box<CascadeError>,
    },
}

impl CascadeError {
    pub fn unknown_table(name: impl Into<String>) -> Self {
        Self::UnknownTable { name: name.into() }
    }

    pub fn unordered_table(table: &'static str) -> Self {
        Self::UnorderedTable { table }
    }
}
